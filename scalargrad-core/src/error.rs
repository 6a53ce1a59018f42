use thiserror::Error;

/// Custom error type for the ScalarGrad framework.
///
/// The engine itself is infallible: operations always produce a value (possibly
/// non-finite) and `backward()` always completes. These variants cover the
/// consumer layer (networks, losses, optimizers, configuration).
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Input arity mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    InputArityMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Length mismatch: expected {expected}, got {actual} during operation {operation}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Empty input for operation {0}")]
    EmptyInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parameter count changed between optimizer steps: expected {expected}, got {actual}")]
    ParameterCountMismatch { expected: usize, actual: usize },

    #[error("Non-finite gradient for parameter {index}")]
    NonFiniteGradient { index: usize },
}
