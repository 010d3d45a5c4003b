use crate::scalar::Scalar;
use approx::abs_diff_eq;

// NaN never matches. Equal infinities do.
fn is_near(actual: f64, expected: f64, tolerance: f64) -> bool {
    actual == expected || abs_diff_eq!(actual, expected, epsilon = tolerance)
}

/// Checks that a scalar's value and gradient are within `tolerance` of the
/// expected ones. Panics with both values on mismatch.
pub fn check_scalar_near(actual: &Scalar, expected_value: f64, expected_grad: f64, tolerance: f64) {
    let value = actual.value();
    let grad = actual.gradient();
    if !is_near(value, expected_value, tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            value,
            expected_value,
            (value - expected_value).abs(),
            tolerance
        );
    }
    if !is_near(grad, expected_grad, tolerance) {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad,
            expected_grad,
            (grad - expected_grad).abs(),
            tolerance
        );
    }
}

/// Checks the gradients of a slice of scalars against the expected ones.
pub fn check_gradients_near(actual: &[Scalar], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected_grads.len(),
        "Gradient count mismatch"
    );
    for (i, (s, e)) in actual.iter().zip(expected_grads.iter()).enumerate() {
        let diff = (s.gradient() - *e).abs();
        if !is_near(s.gradient(), *e, tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                s.gradient(),
                e,
                diff,
                tolerance
            );
        }
    }
}
