use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Subtracts `b` from `a` as `a + (-b)`.
///
/// No dedicated backward rule: `b` receives `-grad` through the `Mul` node of the
/// negation, `a` receives `grad` through the `Add` node. The output's operands are
/// therefore `[a, -b]`.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    add_op(a, &neg_op(b))
}

impl_binary_op!(Sub, sub, sub_op);

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
