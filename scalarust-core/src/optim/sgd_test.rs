use super::*;
use crate::scalar::create::leaves;
use approx::assert_relative_eq;

// Helper to create a parameter carrying a given gradient
fn param_with_grad(value: f64, grad: f64) -> Scalar {
    let p = Scalar::new(value);
    p.set_gradient(grad);
    p
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalaRustError> {
    let params = vec![param_with_grad(1.0, 0.1), param_with_grad(-2.0, 0.4)];
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1, 0.0, 0.0, false)?;

    optimizer.step()?;

    assert_relative_eq!(params[0].value(), 1.0 - 0.1 * 0.1, epsilon = 1e-12);
    assert_relative_eq!(params[1].value(), -2.0 - 0.1 * 0.4, epsilon = 1e-12);
    // step() leaves gradients alone
    assert_eq!(params[0].gradient(), 0.1);
    Ok(())
}

#[test]
fn test_sgd_step_from_backward() -> Result<(), ScalaRustError> {
    // loss = (w - 3)^2, dloss/dw = 2 (w - 3)
    let w = Scalar::new(1.0);
    let loss = (&w - 3.0).pow(2.0);
    loss.backward();
    assert_relative_eq!(w.gradient(), -4.0, epsilon = 1e-12);

    let mut optimizer = SgdOptimizer::new([w.clone()], 0.25, 0.0, 0.0, false)?;
    optimizer.step()?;
    assert_relative_eq!(w.value(), 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), ScalaRustError> {
    let p = param_with_grad(2.0, 0.5);
    let mut optimizer = SgdOptimizer::new([p.clone()], 0.1, 0.0, 0.01, false)?;
    optimizer.step()?;
    // d_p = 0.5 + 0.01 * 2.0
    assert_relative_eq!(p.value(), 2.0 - 0.1 * 0.52, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_momentum() -> Result<(), ScalaRustError> {
    let p = param_with_grad(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new([p.clone()], 0.1, 0.9, 0.0, false)?;

    // First step: buf = 1.0
    optimizer.step()?;
    assert_relative_eq!(p.value(), 0.9, epsilon = 1e-12);

    // Second step with the same gradient: buf = 0.9 * 1.0 + 1.0 = 1.9
    optimizer.step()?;
    assert_relative_eq!(p.value(), 0.9 - 0.19, epsilon = 1e-12);

    match optimizer.state_dict()? {
        OptimizerState::Sgd { momentum_buffers } => {
            assert_relative_eq!(momentum_buffers[&(0, 0)], 1.9, epsilon = 1e-12);
        }
        other => panic!("Unexpected state: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_sgd_nesterov() -> Result<(), ScalaRustError> {
    let p = param_with_grad(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new([p.clone()], 0.1, 0.9, 0.0, true)?;

    // buf = 1.0, d_p = 1.0 + 0.9 * 1.0
    optimizer.step()?;
    assert_relative_eq!(p.value(), 1.0 - 0.19, epsilon = 1e-12);

    // buf = 1.9, d_p = 1.0 + 0.9 * 1.9
    optimizer.step()?;
    assert_relative_eq!(p.value(), 0.81 - 0.1 * 2.71, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_param_group_override() -> Result<(), ScalaRustError> {
    let a = param_with_grad(1.0, 1.0);
    let b = param_with_grad(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new([a.clone()], 0.1, 0.0, 0.0, false)?;

    let options = ParamGroupOptions {
        lr: Some(0.5),
        ..Default::default()
    };
    optimizer.add_param_group(ParamGroup::with_options(vec![b.clone()], options))?;
    assert_eq!(optimizer.param_groups().len(), 2);

    optimizer.step()?;
    assert_relative_eq!(a.value(), 0.9, epsilon = 1e-12);
    assert_relative_eq!(b.value(), 0.5, epsilon = 1e-12);

    optimizer.param_groups_mut()[0].set_lr(0.2);
    assert_eq!(optimizer.param_groups()[0].get_lr(), Some(0.2));
    optimizer.step()?;
    assert_relative_eq!(a.value(), 0.7, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_add_empty_param_group_is_skipped() -> Result<(), ScalaRustError> {
    let mut optimizer = SgdOptimizer::new(leaves(&[1.0]), 0.1, 0.0, 0.0, false)?;
    optimizer.add_param_group(ParamGroup::new(Vec::new()))?;
    assert_eq!(optimizer.param_groups().len(), 1);
    Ok(())
}

#[test]
fn test_sgd_invalid_hyperparameters() {
    let err = SgdOptimizer::new(leaves(&[1.0]), -0.1, 0.0, 0.0, false).unwrap_err();
    assert!(matches!(
        err,
        ScalaRustError::InvalidHyperparameter { ref name, .. } if name == "lr"
    ));

    assert!(SgdOptimizer::new(leaves(&[1.0]), f64::NAN, 0.0, 0.0, false).is_err());
    assert!(SgdOptimizer::new(leaves(&[1.0]), 0.1, -0.5, 0.0, false).is_err());
    assert!(SgdOptimizer::new(leaves(&[1.0]), 0.1, 0.0, -1.0, false).is_err());
    // Nesterov needs momentum
    assert!(SgdOptimizer::new(leaves(&[1.0]), 0.1, 0.0, 0.0, true).is_err());
}

#[test]
fn test_sgd_invalid_group_override() -> Result<(), ScalaRustError> {
    let mut optimizer = SgdOptimizer::new(leaves(&[1.0]), 0.1, 0.0, 0.0, false)?;
    let options = ParamGroupOptions {
        weight_decay: Some(-0.1),
        ..Default::default()
    };
    let result = optimizer.add_param_group(ParamGroup::with_options(leaves(&[2.0]), options));
    assert!(result.is_err());
    assert_eq!(optimizer.param_groups().len(), 1);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), ScalaRustError> {
    let params = vec![param_with_grad(1.0, 3.0), param_with_grad(2.0, -1.0)];
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1, 0.0, 0.0, false)?;
    optimizer.zero_grad();
    assert!(params.iter().all(|p| p.gradient() == 0.0));
    Ok(())
}

#[test]
fn test_sgd_state_dict_round_trip() -> Result<(), ScalaRustError> {
    let p = param_with_grad(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new([p.clone()], 0.1, 0.9, 0.0, false)?;
    optimizer.step()?;
    let saved = optimizer.state_dict()?;

    // A fresh optimizer resumes from the saved buffers.
    let q = param_with_grad(p.value(), 1.0);
    let mut resumed = SgdOptimizer::new([q.clone()], 0.1, 0.9, 0.0, false)?;
    resumed.load_state_dict(&saved)?;
    assert_eq!(resumed.state_dict()?, saved);

    optimizer.step()?;
    resumed.step()?;
    assert_relative_eq!(p.value(), q.value(), epsilon = 1e-12);

    // The default state has no buffers; loading it resets momentum.
    resumed.load_state_dict(&OptimizerState::default())?;
    assert_eq!(
        resumed.state_dict()?,
        OptimizerState::Sgd {
            momentum_buffers: HashMap::new()
        }
    );
    Ok(())
}

#[test]
fn test_sgd_fresh_state_dict_is_default() -> Result<(), ScalaRustError> {
    let optimizer = SgdOptimizer::new(leaves(&[1.0]), 0.1, 0.9, 0.0, false)?;
    assert_eq!(optimizer.state_dict()?, OptimizerState::default());
    Ok(())
}
