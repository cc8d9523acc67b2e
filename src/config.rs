//! SampleDemo Config
//!
//! Loaded from `sample_demo.toml` when that file exists; otherwise the
//! defaults below apply. The application runs without any config file.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// SampleDemo Configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SampleDemoConfig {
    /// The greeting emitted by the `start` command
    pub greeting: GreetingSection,
}

impl SampleDemoConfig {
    /// Check the loaded configuration for values no command can work with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.greeting.recipient.is_empty() {
            return Err(Error::Config {
                field: "greeting.recipient",
                reason: "must not be empty",
            });
        }

        Ok(())
    }
}

/// Greeting configuration section
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GreetingSection {
    /// Who the `start` command greets
    pub recipient: String,
}

impl Default for GreetingSection {
    fn default() -> Self {
        Self {
            recipient: "world".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_valid() {
        let config = SampleDemoConfig::default();
        assert_eq!(config.greeting.recipient, "world");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_recipient_is_rejected() {
        let config = SampleDemoConfig {
            greeting: GreetingSection {
                recipient: String::new(),
            },
        };
        assert_eq!(
            config.validate(),
            Err(Error::Config {
                field: "greeting.recipient",
                reason: "must not be empty",
            })
        );
    }
}
