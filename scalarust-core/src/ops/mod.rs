//! # Scalar Operations Module (`ops`)
//!
//! Graph-building operations on [`Scalar`](crate::Scalar) nodes.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`, `mul_op`, ...)
//!   that computes the forward value and wires the output to its operands.
//! - **Operator Overloading:** `std::ops` impls for `Scalar`, `&Scalar` and `f64`
//!   delegate to the `_op` functions; literals become fresh leaves.
//! - **Backward Rules:** only `add_op`, `mul_op` and `pow_op` attach a rule
//!   ([`BackwardOp`](crate::autograd::BackwardOp)); subtraction, negation and
//!   division are compositions of them.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: `+`, `-`, `*`, `/`, unary `-` and `pow`.

pub mod arithmetic;
