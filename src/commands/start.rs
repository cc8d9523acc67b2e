//! `start` subcommand
//!
//! The framework transfers control here after boot; the process belongs to
//! this command (and the framework's exit handling) from then on.

use crate::config::SampleDemoConfig;
use crate::prelude::*;
use abscissa_core::{config, Command, FrameworkError, Runnable};

/// `start` subcommand
#[derive(clap::Parser, Command, Debug)]
pub struct StartCmd {
    /// To whom are we saying hello?
    recipient: Vec<String>,
}

impl Runnable for StartCmd {
    /// Start the application.
    fn run(&self) {
        let config = APP.config();
        info!("application runtime started");
        println!("Hello, {}!", &config.greeting.recipient);
    }
}

impl config::Override<SampleDemoConfig> for StartCmd {
    /// Positional arguments replace the configured recipient.
    fn override_config(
        &self,
        mut config: SampleDemoConfig,
    ) -> Result<SampleDemoConfig, FrameworkError> {
        if !self.recipient.is_empty() {
            config.greeting.recipient = self.recipient.join(" ");
        }

        Ok(config)
    }
}
