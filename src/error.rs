//! Error types for the propbook contact book.

use thiserror::Error;

/// Field validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{message}")]
    Constraint {
        field: &'static str,
        message: &'static str,
    },
}

impl FieldError {
    pub fn constraint(field: &'static str, message: &'static str) -> Self {
        FieldError::Constraint { field, message }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Constraint { field, .. } => field,
        }
    }
}

/// Command grammar errors, raised before any command runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: String },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Index is not a non-zero unsigned integer: {0}")]
    InvalidIndex(String),

    #[error("Confirmation value must be 'yes', 'y', 'no', 'n' or left empty (got '{0}')")]
    InvalidConfirmation(String),

    #[error("Confirmation is not required for deletion by index")]
    ConfirmationNotAllowed,

    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefix(String),

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Errors raised while executing a parsed command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("The person index provided is invalid: {index} (showing {shown} persons)")]
    InvalidPersonIndex { index: usize, shown: usize },

    #[error("The following persons were not found: {}", .0.join(", "))]
    PersonsNotFound(Vec<String>),

    #[error("This person already exists in the address book")]
    DuplicatePerson,
}

/// Top-level error surfaced by the route table
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        ApiError::Parse(ParseError::Field(err))
    }
}
