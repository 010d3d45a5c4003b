//! # Automatic Differentiation (`autograd`)
//!
//! Reverse-mode differentiation over the graph of [`Scalar`](crate::Scalar) nodes.
//!
//! - [`backward_op`]: the tagged backward rule attached to every non-leaf node.
//! - [`graph`]: reverse topological ordering of the sub-graph under a root.
//! - [`grad_check`]: finite-difference verification of analytical gradients.
//!
//! The entry point is [`Scalar::backward`](crate::Scalar::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
