//! Kode error types

use thiserror::Error;

/// Errors raised by Kode widgets and their configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KodeError {
    /// The operation is intentionally not supported by the widget
    #[error("{0} not supported")]
    UnsupportedOperation(&'static str),

    /// Configuration values that cannot produce a valid widget
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A color attribute that is not `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Styling input that could not be parsed
    #[error("Failed to parse attributes: {0}")]
    AttributeParse(String),
}

/// Result type for Kode operations
pub type Result<T> = std::result::Result<T, KodeError>;
