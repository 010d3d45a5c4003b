use super::optimizer_state::OptimizerState;
use super::param_group::ParamGroup;
use crate::error::ScalaRustError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update leaf parameters in place (`Scalar::set_value`) from the
/// gradients left on them by `backward()`.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads each parameter's gradient and writes its new value. The graph that
    /// produced the gradients is not modified; rebuild it for the next forward pass.
    fn step(&mut self) -> Result<(), ScalaRustError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it before every backward pass: gradients accumulate otherwise.
    fn zero_grad(&mut self);

    /// Adds a new parameter group to the optimizer.
    ///
    /// # Errors
    /// If the group's option overrides are invalid for this optimizer.
    fn add_param_group(&mut self, param_group: ParamGroup) -> Result<(), ScalaRustError>;

    /// Returns the parameter groups managed by the optimizer.
    fn param_groups(&self) -> &[ParamGroup];

    /// Returns the parameter groups mutably, e.g. to change a group's learning rate.
    fn param_groups_mut(&mut self) -> &mut [ParamGroup];

    /// Loads the optimizer's state from an `OptimizerState` object.
    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), ScalaRustError>;

    /// Returns the optimizer's current state (e.g. momentum buffers).
    fn state_dict(&self) -> Result<OptimizerState, ScalaRustError>;
}
