use super::*;
use approx::assert_relative_eq;

#[test]
fn test_add_backward_passes_grad_through() {
    let grads = BackwardOp::Add.backward(2.5, &[-3.0, 7.0]);
    assert_eq!(grads, vec![2.5, 2.5]);
}

#[test]
fn test_mul_backward_swaps_operands() {
    let grads = BackwardOp::Mul.backward(1.0, &[2.0, 6.0]);
    assert_eq!(grads, vec![6.0, 2.0]);

    let grads = BackwardOp::Mul.backward(-0.5, &[2.0, 6.0]);
    assert_eq!(grads, vec![-3.0, -1.0]);
}

#[test]
fn test_pow_backward_integer_exponent() {
    // d/dx x^3 = 3x^2 = 12 at x = 2
    let grads = BackwardOp::Pow { exponent: 3.0 }.backward(1.0, &[2.0]);
    assert_eq!(grads.len(), 1);
    assert_relative_eq!(grads[0], 12.0, epsilon = 1e-12);
}

#[test]
fn test_pow_backward_negative_exponent() {
    // d/dx x^-1 = -1/x^2 = -0.25 at x = 2, scaled by upstream 4
    let grads = BackwardOp::Pow { exponent: -1.0 }.backward(4.0, &[2.0]);
    assert_relative_eq!(grads[0], -1.0, epsilon = 1e-12);
}

#[test]
fn test_pow_backward_fractional_exponent() {
    // d/dx sqrt(x) = 0.5 / sqrt(x) = 0.25 at x = 4
    let grads = BackwardOp::Pow { exponent: 0.5 }.backward(1.0, &[4.0]);
    assert_relative_eq!(grads[0], 0.25, epsilon = 1e-12);
}

#[test]
fn test_pow_backward_zero_base_negative_exponent_is_not_finite() {
    let grads = BackwardOp::Pow { exponent: -1.0 }.backward(1.0, &[0.0]);
    assert!(!grads[0].is_finite());
}

#[test]
fn test_names_and_arity() {
    assert_eq!(BackwardOp::Add.name(), "AddBackward");
    assert_eq!(BackwardOp::Mul.arity(), 2);
    assert_eq!(BackwardOp::Pow { exponent: 2.0 }.arity(), 1);
}
