// src/scalar/accessors.rs
use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

impl Scalar {
    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the forward value (e.g. an optimizer updating a parameter).
    ///
    /// Downstream nodes keep the value they were computed with; rebuild the graph
    /// to see the new value propagate.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// Returns the gradient accumulated so far.
    pub fn gradient(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the gradient.
    pub fn set_gradient(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `delta` to the gradient.
    ///
    /// A node may be an operand of several consumers; their contributions sum.
    pub fn accumulate_gradient(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Resets the gradient of this node to 0.
    pub fn zero_grad(&self) {
        self.set_gradient(0.0);
    }

    /// Returns handles to the direct inputs of this node, in operand order.
    pub fn operands(&self) -> Vec<Scalar> {
        self.read_data().operands.clone()
    }

    /// Returns `true` if this node has no operands.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns the backward rule attached to this node, if any.
    pub fn grad_fn(&self) -> Option<BackwardOp> {
        self.read_data().grad_fn
    }
}
