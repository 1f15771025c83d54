//! Error types for Quboku

use thiserror::Error;

/// Main error type for Quboku operations
#[derive(Debug, Error)]
pub enum QubokuError {
    /// Grid specification violates a structural invariant
    #[error("Invalid grid spec: {0}")]
    InvalidGridSpec(String),

    /// Encoder or decoder argument outside its declared domain
    #[error("Index out of range: {axis} is {value}, valid range is [0, {bound})")]
    IndexOutOfRange {
        /// Which argument was out of range (`"row"`, `"col"` or `"bit"`).
        axis: &'static str,
        value: usize,
        bound: usize,
    },

    /// Solution assignment does not cover every binary variable exactly once
    #[error("Assignment has {actual} bits, expected {expected}")]
    AssignmentLength { expected: usize, actual: usize },

    /// Grid cell value does not fit the per-cell encoding width
    #[error("Cell value {value} at ({row}, {col}) does not fit in {bits} bits")]
    ValueOutOfRange {
        row: usize,
        col: usize,
        value: u32,
        bits: usize,
    },
}

/// Result type alias for Quboku operations
pub type Result<T> = std::result::Result<T, QubokuError>;
