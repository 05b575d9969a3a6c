//! Error types for guestwire.

use thiserror::Error;

/// Main error type for all guestwire operations.
#[derive(Debug, Error)]
pub enum GuestwireError {
    /// Hex decode input has odd length or contains non-hex characters.
    #[error("Malformed hex: {0}")]
    MalformedHex(String),

    /// A value does not fit a fixed 32-bit frame field.
    #[error("Value out of range for 32-bit frame field: {0}")]
    OutOfRange(u64),

    /// Protocol error (truncated stream, length field mismatch, etc.).
    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Result type alias using GuestwireError.
pub type Result<T> = std::result::Result<T, GuestwireError>;
