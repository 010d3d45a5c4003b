//! Optimizers that update `Scalar` parameters from their gradients.
//!
//! This module provides the `Optimizer` trait, supporting structures like
//! `ParamGroup` and `OptimizerState`, and the SGD optimizer.

pub mod optimizer_state;
pub mod optimizer_trait;
pub mod param_group;
pub mod sgd;

pub use optimizer_state::OptimizerState;
pub use optimizer_trait::Optimizer;
pub use param_group::{ParamGroup, ParamGroupOptions};
pub use sgd::SgdOptimizer;
