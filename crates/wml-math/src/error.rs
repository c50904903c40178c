//! Error types for matrix and vector operations

use thiserror::Error;

/// Errors that can occur at the fallible edges of the math API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A flat buffer does not hold the number of floats a matrix needs
    #[error("Matrix buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Strict inversion of a matrix whose determinant is exactly zero
    #[error("Cannot invert matrix: determinant is 0")]
    SingularMatrix,

    /// Checked division by a vector with a zero component
    #[error("Division by zero in component {axis}")]
    ZeroComponent { axis: char },
}

impl MathError {
    /// Create a buffer length error
    pub fn buffer_length(expected: usize, actual: usize) -> Self {
        MathError::BufferLength { expected, actual }
    }
}

/// Result type for math operations
pub type MathResult<T> = Result<T, MathError>;
