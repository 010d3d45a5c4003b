// src/scalar/traits.rs

use crate::scalar::Scalar;
use num_traits::{One, Zero};
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Scalar {
    /// Clones the handle. This is a shallow clone that increases the reference count
    /// of the underlying node; gradient updates are visible through every clone.
    fn clone(&self) -> Self {
        Scalar {
            data: Rc::clone(&self.data),
        }
    }
}

/// Compares node identity, not values. Use `value()` for numeric equality.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl Zero for Scalar {
    /// A fresh leaf holding 0.
    fn zero() -> Self {
        Scalar::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

impl One for Scalar {
    /// A fresh leaf holding 1.
    fn one() -> Self {
        Scalar::new(1.0)
    }

    fn is_one(&self) -> bool
    where
        Self: PartialEq,
    {
        self.value() == 1.0
    }
}

// Folds start from the first element so that summing `n` nodes adds `n - 1` nodes.
// An empty iterator yields a fresh identity leaf.

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, x| acc + x),
            None => Scalar::zero(),
        }
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl Product for Scalar {
    fn product<I: Iterator<Item = Scalar>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, x| acc * x),
            None => Scalar::one(),
        }
    }
}

impl<'a> Product<&'a Scalar> for Scalar {
    fn product<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.cloned().product()
    }
}
