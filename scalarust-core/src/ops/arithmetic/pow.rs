// scalarust-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::scalar::Scalar;
use num_traits::Pow;

// --- Forward Operation ---

/// Raises `base` to a constant `exponent`.
///
/// The output has the single operand `[base]` and the `Pow { exponent }` rule:
/// `base` receives `exponent * base^(exponent - 1) * grad`. The exponent is a plain
/// value; when it comes from a node, that node is not part of the graph and never
/// receives a gradient.
pub fn pow_op(base: &Scalar, exponent: f64) -> Scalar {
    let value = base.value().powf(exponent);
    Scalar::from_op(value, vec![base.clone()], BackwardOp::Pow { exponent })
}

// --- Scalar Method ---

impl Scalar {
    /// Raises this scalar to `exponent`, a literal or another node (whose current
    /// value is used as a constant).
    pub fn pow(&self, exponent: impl Into<Scalar>) -> Scalar {
        pow_op(self, exponent.into().value())
    }
}

// --- num_traits::Pow ---
// Only on `&Scalar`, so method calls on an owned `Scalar` resolve to the inherent `pow`.

impl Pow<f64> for &Scalar {
    type Output = Scalar;

    fn pow(self, exponent: f64) -> Scalar {
        pow_op(self, exponent)
    }
}

impl Pow<i32> for &Scalar {
    type Output = Scalar;

    fn pow(self, exponent: i32) -> Scalar {
        pow_op(self, f64::from(exponent))
    }
}

impl Pow<&Scalar> for &Scalar {
    type Output = Scalar;

    fn pow(self, exponent: &Scalar) -> Scalar {
        pow_op(self, exponent.value())
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
