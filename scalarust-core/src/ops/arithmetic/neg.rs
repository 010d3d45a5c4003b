use crate::ops::arithmetic::mul::mul_op;
use crate::scalar::Scalar;
use std::ops::Neg;

// --- Forward Operation ---

/// Negates a scalar as `a * -1`.
///
/// The `-1` is a fresh leaf, so the result is an ordinary `Mul` node with
/// operands `[a, -1]`.
pub fn neg_op(a: &Scalar) -> Scalar {
    mul_op(a, &Scalar::new(-1.0))
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(&self)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
