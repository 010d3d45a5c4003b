// scalarust-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Multiplies two scalars.
///
/// The output has operands `[a, b]` and the `Mul` rule:
/// `a` receives `b.value * grad`, `b` receives `a.value * grad`.
/// Operand values are read when the rule runs, not captured here.
pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    let value = a.value() * b.value();
    Scalar::from_op(value, vec![a.clone(), b.clone()], BackwardOp::Mul)
}

impl_binary_op!(Mul, mul, mul_op);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
