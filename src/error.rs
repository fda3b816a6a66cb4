//! Error types for the calculator engine and its script host.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while driving the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The raw buffer could not be parsed as a number at a commit point
    #[error("Invalid operand {input:?}: not a decimal number")]
    InvalidOperand { input: String },

    /// Failed to open or read the key script
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Script row whose label maps to no key
    #[error("Unknown key {label:?} at row {row}")]
    UnknownKey { row: usize, label: String },
}
