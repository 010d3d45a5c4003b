use crate::error::ScalaRustError;
use crate::scalar::{create::leaves, Scalar};
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check needs at least one input.")]
    NoInputs,
    #[error("Invalid gradient check configuration: {0}")]
    InvalidConfiguration(ScalaRustError),
}

impl From<ScalaRustError> for GradCheckError {
    fn from(err: ScalaRustError) -> Self {
        GradCheckError::InvalidConfiguration(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` is called once on fresh leaves holding `inputs` to get the analytical
/// gradients through `backward()`, then twice per input on fresh leaves with that
/// input shifted by `±epsilon`. Every evaluation builds its own graph.
///
/// Gradients match when they are within `tolerance`, absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Scalar,
{
    // --- Initial Checks ---
    if inputs.is_empty() {
        return Err(GradCheckError::NoInputs);
    }
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(ScalaRustError::invalid_hyperparameter("epsilon", epsilon, "must be finite and > 0").into());
    }
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(ScalaRustError::invalid_hyperparameter("tolerance", tolerance, "must be finite and >= 0").into());
    }

    // --- 1. Analytical gradients ---
    let input_leaves = leaves(inputs);
    let output = func(&input_leaves);
    output.backward();
    let analytical: Vec<f64> = input_leaves.iter().map(Scalar::gradient).collect();

    // --- 2. Numerical gradients, one input at a time ---
    let evaluate = |index: usize, shift: f64| -> f64 {
        let mut shifted = inputs.to_vec();
        shifted[index] += shift;
        func(&leaves(&shifted)).value()
    };

    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate(input_index, epsilon);
        let loss_minus = evaluate(input_index, -epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        debug!(
            "check_grad: input {} analytical={} numerical={}",
            input_index, analytical_grad, numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
