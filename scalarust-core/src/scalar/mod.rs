// src/scalar/mod.rs

use crate::autograd::BackwardOp;
use crate::scalar_data::ScalarData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

// --- Implementation modules ---
mod accessors;
mod autograd_methods;
pub mod create;
mod debug;
mod traits;

/// Identity of a node in the computation graph.
///
/// The address of the shared `RefCell<ScalarData>`. It is stable for as long as one
/// `Scalar` handle to the node is alive, which makes it usable as a `HashSet`/`HashMap`
/// key during a traversal that holds clones of every visited node.
pub type NodeId = *const RefCell<ScalarData>;

/// A scalar node of the computation graph.
///
/// `Scalar` uses `Rc<RefCell<ScalarData>>` internally to allow for:
/// 1.  **Shared Ownership:** the same node can be an operand of many downstream
///     nodes (`a * a * a`). Cloning a `Scalar` clones the handle, never the node.
/// 2.  **Interior Mutability:** the gradient (and, for parameter updates, the value)
///     can be written through a shared handle.
///
/// Equality and hashing are by identity: two handles are equal iff they point to
/// the same node.
pub struct Scalar {
    /// Rc for shared ownership, RefCell for interior mutability of ScalarData.
    pub(crate) data: Rc<RefCell<ScalarData>>,
}

impl Scalar {
    /// Creates a leaf node holding `value`, with gradient 0 and no operands.
    pub fn new(value: f64) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::new(value))),
        }
    }

    /// Creates an internal node with the given operands and a no-op backward rule.
    ///
    /// Operators use [`Scalar::from_op`] instead, which attaches the rule.
    pub fn with_operands(value: f64, operands: Vec<Scalar>) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(ScalarData::with_operands(value, operands))),
        }
    }

    /// Creates the output node of an operation, wired to `operands` with `grad_fn`.
    pub(crate) fn from_op(value: f64, operands: Vec<Scalar>, grad_fn: BackwardOp) -> Self {
        debug_assert_eq!(
            operands.len(),
            grad_fn.arity(),
            "{} expects {} operands",
            grad_fn.name(),
            grad_fn.arity()
        );
        let mut scalar_data = ScalarData::with_operands(value, operands);
        scalar_data.grad_fn = Some(grad_fn);
        Scalar {
            data: Rc::new(RefCell::new(scalar_data)),
        }
    }

    /// Borrows the node data immutably.
    ///
    /// Panics if the node is currently borrowed mutably, which cannot happen through
    /// the public API since no borrow outlives a single method call.
    pub fn read_data(&self) -> Ref<'_, ScalarData> {
        self.data.borrow()
    }

    /// Borrows the node data mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ScalarData> {
        self.data.borrow_mut()
    }

    /// Returns the identity of this node.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Scalar) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
