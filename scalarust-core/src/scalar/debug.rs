// src/scalar/debug.rs
use crate::scalar::Scalar;
use std::fmt;

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Scalar(value={}, grad={})", guard.value, guard.grad)
    }
}

// Manual implementation of Debug trait: operands are summarized by count, printing
// them recursively would walk the whole graph.
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Scalar(value={:?}, grad={:?}, grad_fn={}, operands={})",
            guard.value,
            guard.grad,
            guard.grad_fn.map_or("None", |op| op.name()),
            guard.operands.len()
        )
    }
}
