use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Divides `a` by `b` as `a * b^-1`.
///
/// No dedicated backward rule: `b` receives its gradient through the `Mul` rule
/// and then the `Pow { exponent: -1 }` rule. Division by a zero-valued node yields
/// an infinite or NaN value and gradient, without error.
pub fn div_op(a: &Scalar, b: &Scalar) -> Scalar {
    mul_op(a, &pow_op(b, -1.0))
}

impl_binary_op!(Div, div, div_op);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
