// src/autograd/backward_op.rs

/// The backward rule of a non-leaf `Scalar`.
///
/// Every operation that creates a node with a non-trivial derivative tags the output
/// with one of these variants (stored in the node's `grad_fn`). During `backward()`
/// the rule receives \( \frac{dL}{d\text{Output}} \) and the current values of the
/// operands and returns \( \frac{dL}{d\text{Input}_i} \) for each operand.
///
/// Subtraction, negation and division have no variant of their own: they are
/// composed from `Add`, `Mul` and `Pow` when the graph is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// `lhs + rhs`: both partial derivatives are 1.
    Add,
    /// `lhs * rhs`: \( \partial/\partial\text{lhs} = \text{rhs} \), \( \partial/\partial\text{rhs} = \text{lhs} \).
    Mul,
    /// `base ^ exponent` with the exponent captured as a constant at construction.
    /// Only `base` is an operand.
    Pow { exponent: f64 },
}

impl BackwardOp {
    /// Name of the operation, for logging and `Debug` output.
    pub fn name(&self) -> &'static str {
        match self {
            BackwardOp::Add => "AddBackward",
            BackwardOp::Mul => "MulBackward",
            BackwardOp::Pow { .. } => "PowBackward",
        }
    }

    /// Number of operands the rule expects.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Add | BackwardOp::Mul => 2,
            BackwardOp::Pow { .. } => 1,
        }
    }

    /// Computes the gradient contribution for each operand.
    ///
    /// # Arguments
    /// * `grad_output`: gradient of the loss with respect to the output node.
    /// * `inputs`: current values of the operands, in operand order.
    ///
    /// # Returns
    /// One contribution per operand, in the same order as `inputs`. Non-finite inputs
    /// produce non-finite contributions; nothing is validated.
    pub fn backward(&self, grad_output: f64, inputs: &[f64]) -> Vec<f64> {
        debug_assert_eq!(inputs.len(), self.arity(), "{}: wrong operand count", self.name());
        match *self {
            BackwardOp::Add => vec![grad_output, grad_output],
            BackwardOp::Mul => vec![inputs[1] * grad_output, inputs[0] * grad_output],
            BackwardOp::Pow { exponent } => {
                let base = inputs[0];
                vec![exponent * base.powf(exponent - 1.0) * grad_output]
            }
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
