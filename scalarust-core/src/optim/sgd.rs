use crate::error::ScalaRustError;
use crate::optim::optimizer_state::{OptimizerState, ParamKey};
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::param_group::{ParamGroup, ParamGroupOptions};
use crate::scalar::Scalar;
use log::{debug, warn};
use std::collections::HashMap;

/// Resolved hyperparameters of one parameter group.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SgdHyperparams {
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    nesterov: bool,
}

impl SgdHyperparams {
    fn validate(&self) -> Result<(), ScalaRustError> {
        if !(self.lr.is_finite() && self.lr >= 0.0) {
            return Err(ScalaRustError::invalid_hyperparameter("lr", self.lr, "must be finite and >= 0"));
        }
        if !(self.momentum.is_finite() && self.momentum >= 0.0) {
            return Err(ScalaRustError::invalid_hyperparameter("momentum", self.momentum, "must be finite and >= 0"));
        }
        if !(self.weight_decay.is_finite() && self.weight_decay >= 0.0) {
            return Err(ScalaRustError::invalid_hyperparameter(
                "weight_decay",
                self.weight_decay,
                "must be finite and >= 0",
            ));
        }
        if self.nesterov && self.momentum == 0.0 {
            return Err(ScalaRustError::invalid_hyperparameter(
                "momentum",
                self.momentum,
                "Nesterov momentum requires a momentum > 0",
            ));
        }
        Ok(())
    }

    /// Applies a group's overrides on top of these defaults.
    fn merged(&self, options: &ParamGroupOptions) -> SgdHyperparams {
        SgdHyperparams {
            lr: options.lr.unwrap_or(self.lr),
            momentum: options.momentum.unwrap_or(self.momentum),
            weight_decay: options.weight_decay.unwrap_or(self.weight_decay),
            nesterov: options.nesterov.unwrap_or(self.nesterov),
        }
    }
}

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum, weight decay, and Nesterov momentum:
///
/// ```text
/// d_p = grad + weight_decay * value
/// buf = momentum * buf + d_p              (buf = d_p on the first step)
/// d_p = d_p + momentum * buf  if nesterov, else buf
/// value = value - lr * d_p
/// ```
#[derive(Debug)]
pub struct SgdOptimizer {
    param_groups: Vec<ParamGroup>,
    defaults: SgdHyperparams,
    momentum_buffers: HashMap<ParamKey, f64>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: the parameters to optimize, placed into a default parameter group.
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor (0.0 disables momentum).
    /// * `weight_decay`: Weight decay (L2 penalty) factor.
    /// * `nesterov`: Enables Nesterov momentum.
    ///
    /// These values are the defaults for every group; `add_param_group` can add
    /// groups that override them.
    ///
    /// # Errors
    /// `InvalidHyperparameter` for a negative or non-finite value, or for Nesterov
    /// without momentum.
    pub fn new(
        params: impl IntoIterator<Item = Scalar>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
        nesterov: bool,
    ) -> Result<Self, ScalaRustError> {
        let defaults = SgdHyperparams {
            lr,
            momentum,
            weight_decay,
            nesterov,
        };
        defaults.validate()?;

        let params_vec: Vec<Scalar> = params.into_iter().collect();
        Ok(SgdOptimizer {
            param_groups: vec![ParamGroup::new(params_vec)],
            defaults,
            momentum_buffers: HashMap::new(),
        })
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalaRustError> {
        debug!("SgdOptimizer: step() called");
        for (group_idx, group) in self.param_groups.iter().enumerate() {
            let hp = self.defaults.merged(&group.options);
            debug!("SgdOptimizer: group {}, hyperparameters = {:?}", group_idx, hp);

            for (param_idx, param) in group.params.iter().enumerate() {
                let mut d_p = param.gradient();
                if !d_p.is_finite() {
                    warn!(
                        "SgdOptimizer: non-finite gradient {} for param {} in group {}",
                        d_p, param_idx, group_idx
                    );
                }

                if hp.weight_decay != 0.0 {
                    d_p += hp.weight_decay * param.value();
                }

                if hp.momentum != 0.0 {
                    let buffer = self
                        .momentum_buffers
                        .entry((group_idx, param_idx))
                        .and_modify(|buf| *buf = hp.momentum * *buf + d_p)
                        .or_insert(d_p);
                    d_p = if hp.nesterov { d_p + hp.momentum * *buffer } else { *buffer };
                }

                param.set_value(param.value() - hp.lr * d_p);
            }
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        debug!("SgdOptimizer: zero_grad() called");
        for group in self.param_groups.iter() {
            for param in group.params.iter() {
                param.zero_grad();
            }
        }
    }

    fn add_param_group(&mut self, param_group: ParamGroup) -> Result<(), ScalaRustError> {
        if param_group.params.is_empty() {
            debug!("SgdOptimizer: Skipping adding an empty param group.");
            return Ok(());
        }
        self.defaults.merged(&param_group.options).validate()?;
        self.param_groups.push(param_group);
        debug!("SgdOptimizer: Added new param group.");
        Ok(())
    }

    fn param_groups(&self) -> &[ParamGroup] {
        &self.param_groups
    }

    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        &mut self.param_groups
    }

    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), ScalaRustError> {
        match state_dict {
            OptimizerState::Sgd { momentum_buffers } => {
                if self.defaults.momentum == 0.0 && !momentum_buffers.is_empty() {
                    warn!("Loading SGD state with momentum buffers, but optimizer momentum is 0.");
                }
                self.momentum_buffers = momentum_buffers.clone();
                Ok(())
            }
        }
    }

    fn state_dict(&self) -> Result<OptimizerState, ScalaRustError> {
        Ok(OptimizerState::Sgd {
            momentum_buffers: self.momentum_buffers.clone(),
        })
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
