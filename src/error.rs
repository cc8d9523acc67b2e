//! Error types

use thiserror::Error;

/// Kinds of errors
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// Error in configuration file
    #[error("config error: `{field}` {reason}")]
    Config {
        /// Offending configuration field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },
}
