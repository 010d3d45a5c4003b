// src/scalar/autograd_methods.rs

use crate::autograd::graph::topological_sort;
use crate::scalar::Scalar;
use log::{debug, trace};

impl Scalar {
    /// Computes the gradient of this node with respect to every node it depends on.
    ///
    /// Seeds `self.grad = 1` (overwriting any previous value), sorts the reachable
    /// sub-graph in reverse topological order and applies every node's backward rule
    /// exactly once, so each node has received all of its consumers' contributions
    /// before it propagates to its own operands.
    ///
    /// Gradients of the other nodes are accumulated, not overwritten: call
    /// [`Scalar::zero_grad_graph`] before a second pass over the same graph.
    pub fn backward(&self) {
        self.set_gradient(1.0);

        if self.is_leaf() {
            debug!("backward() called on a leaf scalar. No operation to perform.");
            return;
        }

        let sorted_nodes = topological_sort(self);
        debug!("backward(): propagating through {} nodes", sorted_nodes.len());

        for node in sorted_nodes.iter() {
            node.local_backward();
        }
    }

    /// Applies this node's backward rule once.
    ///
    /// Reads the current gradient of this node and the current values of its
    /// operands, and accumulates the contribution into each operand's gradient.
    /// A no-op for nodes without a rule.
    pub fn local_backward(&self) {
        let (grad_fn, grad_output, operands) = {
            let guard = self.read_data();
            match guard.grad_fn {
                Some(op) => (op, guard.grad, guard.operands.clone()),
                None => return,
            }
        };

        let input_values: Vec<f64> = operands.iter().map(Scalar::value).collect();
        let input_grads = grad_fn.backward(grad_output, &input_values);
        trace!(
            "local_backward(): {} grad_output={} -> {:?}",
            grad_fn.name(),
            grad_output,
            input_grads
        );

        for (operand, grad) in operands.iter().zip(input_grads) {
            operand.accumulate_gradient(grad);
        }
    }

    /// Resets the gradient of this node and of every node reachable from it.
    pub fn zero_grad_graph(&self) {
        for node in topological_sort(self) {
            node.zero_grad();
        }
    }
}
