use crate::scalar::Scalar;

/// Defines a group of parameters with specific optimizer hyperparameters.
///
/// This allows applying different settings (like learning rate or weight decay)
/// to different parameters. Options left at `None` fall back to the optimizer's
/// defaults.
#[derive(Clone, Debug)]
pub struct ParamGroup {
    /// The parameters included in this group, usually leaves.
    pub params: Vec<Scalar>,

    /// Specific options/hyperparameters for this group.
    pub options: ParamGroupOptions,
}

/// Options specific to a parameter group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamGroupOptions {
    pub lr: Option<f64>,
    pub momentum: Option<f64>,
    pub weight_decay: Option<f64>,
    pub nesterov: Option<bool>,
}

impl ParamGroup {
    /// Creates a new parameter group with default options.
    pub fn new(params: Vec<Scalar>) -> Self {
        ParamGroup {
            params,
            options: ParamGroupOptions::default(),
        }
    }

    /// Creates a new parameter group with the given options.
    pub fn with_options(params: Vec<Scalar>, options: ParamGroupOptions) -> Self {
        ParamGroup { params, options }
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.options.lr = Some(lr);
    }

    pub fn get_lr(&self) -> Option<f64> {
        self.options.lr
    }
}
