// src/scalar_data.rs
use crate::autograd::BackwardOp;
use crate::scalar::Scalar;
use std::rc::Rc;

/// Internal storage and metadata for a Scalar.
///
/// This struct holds the forward value, the gradient accumulator, the ordered
/// operands and the backward rule of one node of the computation graph.
/// It is wrapped in `Rc<RefCell<ScalarData>>` by the `Scalar` struct to allow
/// shared ownership and interior mutability.
#[derive(Debug)]
pub struct ScalarData {
    /// The forward-computed value.
    /// Only rewritten through `Scalar::set_value` (e.g. parameter updates between steps).
    pub(crate) value: f64,

    // --- Autograd Metadata ---
    /// Gradient accumulator, 0 at construction.
    /// Written by the backward pass through `accumulate_gradient` only.
    pub(crate) grad: f64,
    /// Direct inputs of the operation that produced this node, in operand order
    /// (index 0 = left, index 1 = right). Empty for leaves.
    pub(crate) operands: Vec<Scalar>,
    /// The backward rule attached by the producing operator.
    /// Leaves (and nodes built with explicit operands only) have `grad_fn = None`.
    pub(crate) grad_fn: Option<BackwardOp>,
}

impl ScalarData {
    /// Creates the data of a leaf node.
    pub fn new(value: f64) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            operands: Vec::new(),
            grad_fn: None,
        }
    }

    /// Creates the data of an internal node with a no-op backward rule.
    pub fn with_operands(value: f64, operands: Vec<Scalar>) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            operands,
            grad_fn: None,
        }
    }

    /// Returns `true` if this node has no operands.
    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }
}

// Dropping a node drops its operands, which would recurse once per node along a
// chain. Nodes whose last handle goes away here are unwrapped and their operands
// moved onto a work stack instead.
impl Drop for ScalarData {
    fn drop(&mut self) {
        let mut stack: Vec<Scalar> = std::mem::take(&mut self.operands);
        while let Some(scalar) = stack.pop() {
            if let Ok(cell) = Rc::try_unwrap(scalar.data) {
                let mut data = cell.into_inner();
                stack.append(&mut data.operands);
            }
        }
    }
}
