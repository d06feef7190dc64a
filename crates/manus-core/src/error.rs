//! Error types for MANUS

use thiserror::Error;

/// Core MANUS errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ManusError {
    // Codec errors
    #[error("schema mismatch: {kind} record has no value for `{path}`")]
    SchemaMismatch {
        kind: &'static str,
        path: &'static str,
    },

    #[error("flat sequence underflow: schema needs {needed} scalars, {remaining} remaining")]
    Underflow { needed: usize, remaining: usize },

    #[error("flat sequence overflow: {leftover} scalars left after a full hand")]
    Overflow { leftover: usize },

    // Wire errors
    #[error("buffer too short: expected {expected}, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    // Capture errors
    #[error("round-trip mismatch at scalar index {index}")]
    RoundTripMismatch { index: usize },

    // Runtime errors
    #[error("no tracking frame has been received yet")]
    StaleAccess,

    #[error("cannot open device: {0}")]
    DeviceUnavailable(String),

    #[error("tracking source error: {0}")]
    SourceError(String),

    #[error("display surface error: {0}")]
    DisplayError(String),
}

/// Result type for MANUS operations
pub type ManusResult<T> = Result<T, ManusError>;
