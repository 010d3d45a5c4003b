// src/scalar/create.rs
//! Leaf construction and literal lifting.

use crate::scalar::Scalar;

/// Creates one leaf per value, in order.
pub fn leaves(values: &[f64]) -> Vec<Scalar> {
    values.iter().copied().map(Scalar::new).collect()
}

// --- Literal lifting ---
// Every literal becomes a fresh leaf, so two uses of the same literal are two nodes.

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::new(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::new(f64::from(value))
    }
}

/// Shallow: yields another handle to the same node.
impl From<&Scalar> for Scalar {
    fn from(scalar: &Scalar) -> Self {
        scalar.clone()
    }
}
