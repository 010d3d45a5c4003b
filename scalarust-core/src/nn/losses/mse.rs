// scalarust-core/src/nn/losses/mse.rs

use crate::error::ScalaRustError;
use crate::ops::arithmetic::{div_op, mul_op, sub_op};
use crate::scalar::Scalar;
use std::str::FromStr;

/// Specifies the reduction to apply to the output:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalaRustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalaRustError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// The loss is built entirely out of graph operators, so calling `backward()` on the
/// result propagates into every prediction (and into targets that are themselves
/// part of a graph).
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    /// Creates a new `MSELoss` with the given reduction.
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `reduce((p_i - t_i)^2)`.
    ///
    /// # Errors
    /// * `LengthMismatch` if the slices differ in length.
    /// * `EmptyInput` if they are empty.
    pub fn calculate(&self, predictions: &[Scalar], targets: &[Scalar]) -> Result<Scalar, ScalaRustError> {
        if predictions.len() != targets.len() {
            return Err(ScalaRustError::LengthMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalaRustError::EmptyInput {
                operation: "MSELoss::calculate".to_string(),
            });
        }

        let squared_errors: Scalar = predictions
            .iter()
            .zip(targets)
            .map(|(p, t)| {
                let diff = sub_op(p, t);
                mul_op(&diff, &diff)
            })
            .sum();

        match self.reduction {
            Reduction::Sum => Ok(squared_errors),
            Reduction::Mean => Ok(div_op(&squared_errors, &Scalar::new(predictions.len() as f64))),
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
