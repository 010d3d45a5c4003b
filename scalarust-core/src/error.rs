use thiserror::Error;

/// Custom error type for the ScalaRust framework.
///
/// The computation graph itself never fails: arithmetic and `backward()` follow
/// IEEE-754 semantics and propagate `NaN`/`Infinity`. These variants cover the
/// surfaces built on top of the graph (optimizers, losses, initializers).
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalaRustError {
    #[error("Invalid hyperparameter '{name}' = {value}: {reason}")]
    InvalidHyperparameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("Length mismatch: expected {expected}, got {actual} during operation {operation}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation '{operation}' requires at least one element")]
    EmptyInput { operation: String },

    #[error("Invalid {distribution} distribution: {reason}")]
    InvalidDistribution {
        distribution: String,
        reason: String,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl ScalaRustError {
    pub(crate) fn invalid_hyperparameter(name: &str, value: f64, reason: &str) -> Self {
        ScalaRustError::InvalidHyperparameter {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}
