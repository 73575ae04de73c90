//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Character has no mapping in the active code page (strict policy)
    #[error("Unsupported character '{character}' at position {index}")]
    CharacterEncoding { character: char, index: usize },

    /// Numeric command parameter outside the range the printer accepts
    #[error("{parameter} must be between {min} and {max}, got {value}")]
    OutOfRange {
        parameter: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// `line` was called with an empty pattern
    #[error("Line pattern must contain at least one character")]
    EmptyPattern,

    /// Network connection error
    #[error("Connection to {addr} failed: {source}")]
    Connection {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error while writing to the printer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout waiting for the transport
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Operation attempted after `disconnect`
    #[error("Printer session is closed")]
    SessionClosed,

    /// Invalid printer or code page configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl PrintError {
    /// Whether the error came from the transport (connect, write or timeout)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PrintError::Connection { .. } | PrintError::Io(_) | PrintError::Timeout(_)
        )
    }
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
