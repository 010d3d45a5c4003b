use std::collections::HashMap;

/// Position of a parameter inside an optimizer: `(group index, parameter index)`.
///
/// Node identities are not stable across graphs, so saved state is keyed by position.
pub type ParamKey = (usize, usize);

/// Represents the state of an optimizer.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizerState {
    /// State specific to the SGD optimizer.
    Sgd {
        /// Momentum buffers associated with parameters.
        momentum_buffers: HashMap<ParamKey, f64>,
    },
}

/// The state of an optimizer that has not stepped yet: no momentum buffers.
/// Loading it clears the optimizer's state.
impl Default for OptimizerState {
    fn default() -> Self {
        OptimizerState::Sgd {
            momentum_buffers: HashMap::new(),
        }
    }
}
