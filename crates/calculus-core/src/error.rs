//! Error types for Ark Calculus arithmetic and configuration

use thiserror::Error;

/// Result type alias for Calculus operations
pub type Result<T> = std::result::Result<T, CalculusError>;

/// Errors that can occur while building or combining numbers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculusError {
    // === Arithmetic ===
    /// Operand could not be parsed as a number
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Divisor was exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Value does not fit the requested primitive type
    #[error("Numeric overflow: {0}")]
    Overflow(String),

    // === Configuration ===
    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalculusError {
    /// Stable numeric code for the error kind
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidNumber(_) => 2001,
            Self::DivisionByZero => 2002,
            Self::Overflow(_) => 2003,
            Self::Config(_) => 3001,
        }
    }

    /// Check if the error came from the arithmetic layer
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber(_) | Self::DivisionByZero | Self::Overflow(_)
        )
    }
}
