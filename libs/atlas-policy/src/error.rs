//! Policy Core Error Types

use thiserror::Error;

/// Result type for policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Policy evaluation errors
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Value could not be read as a base-10 integer
    #[error("Not a valid integer: {0}")]
    InvalidInteger(String),

    /// Value could not be read as a number
    #[error("Not a valid number: {0}")]
    InvalidNumber(String),
}

impl PolicyError {
    pub fn invalid_integer(msg: impl Into<String>) -> Self {
        Self::InvalidInteger(msg.into())
    }

    pub fn invalid_number(msg: impl Into<String>) -> Self {
        Self::InvalidNumber(msg.into())
    }
}
