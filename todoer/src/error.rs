//! Error types for the to-do screen.

use thiserror::Error;

/// A draft was rejected by `add`
///
/// Reported to the user as a transient notification; the draft is kept so
/// the user can fix it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty after trimming
    #[error("Provide a Todo name")]
    EmptyName,
}

/// Invalid configuration value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable could not be parsed or is out of range
    #[error("Invalid value for {key}: {value:?}")]
    Invalid {
        /// Variable name
        key: &'static str,
        /// Raw value as found in the environment
        value: String,
    },
}

/// Errors from parsing demo shell input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// First word is not a known command
    #[error("Unknown command {0:?} (try `help`)")]
    UnknownCommand(String),
    /// Command needs an argument
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    /// Argument could not be understood
    #[error("Invalid argument for `{command}`: {value:?}")]
    InvalidArgument {
        /// Command name
        command: &'static str,
        /// Raw argument
        value: String,
    },
    /// Row number outside the visible list
    #[error("No row {0}")]
    NoSuchRow(usize),
}
