// scalarust-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Adds two scalars.
///
/// The output has operands `[a, b]` and the `Add` rule: both operands receive the
/// output gradient unchanged. Passing the same node twice (`a + a`) records it twice.
pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    let value = a.value() + b.value();
    Scalar::from_op(value, vec![a.clone(), b.clone()], BackwardOp::Add)
}

impl_binary_op!(Add, add, add_op);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
