// examples/basic_sgd_linear.rs
//!
//! Fits `y = 2x + 1` with two scalar parameters, the MSE loss and SGD.
//! Run with `RUST_LOG=debug` to see the optimizer and backward-pass logs.

use log::info;
use scalarust_core::{
    error::ScalaRustError,
    nn::{init::normal, MSELoss, Reduction},
    optim::{
        optimizer_trait::Optimizer,
        param_group::{ParamGroup, ParamGroupOptions},
        sgd::SgdOptimizer,
    },
    scalar::create::leaves,
    Scalar,
};

fn main() -> Result<(), ScalaRustError> {
    env_logger::init();
    println!("Starting scalar linear regression example...");

    // Hyperparameters
    let epochs = 200;
    let lr = 0.1;
    let momentum = 0.5;
    let bias_lr_multiplier = 0.5;
    let reduction: Reduction = "mean".parse()?;

    let w = normal(0.0, 1.0)?;
    let b = normal(0.0, 1.0)?;
    println!("Initial parameters: w = {:.4}, b = {:.4}", w.value(), b.value());

    let xs: Vec<f64> = (0..10).map(|i| -1.0 + 0.2 * f64::from(i)).collect();
    let targets = leaves(&xs.iter().map(|x| 2.0 * x + 1.0).collect::<Vec<_>>());
    let loss_fn = MSELoss::new(reduction);

    // Weight in the default group, bias in its own group with a smaller lr.
    let mut optimizer = SgdOptimizer::new([w.clone()], lr, momentum, 0.0, false)?;
    let bias_options = ParamGroupOptions {
        lr: Some(lr * bias_lr_multiplier),
        ..Default::default()
    };
    optimizer.add_param_group(ParamGroup::with_options(vec![b.clone()], bias_options))?;

    // --- Training Loop ---
    for epoch in 0..epochs {
        let predictions: Vec<Scalar> = xs.iter().map(|x| &w * *x + &b).collect();
        let loss = loss_fn.calculate(&predictions, &targets)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if (epoch + 1) % 20 == 0 {
            println!("Epoch [{}/{}], Loss: {:.6}", epoch + 1, epochs, loss.value());
        }
        info!("epoch {}: w = {}, b = {}", epoch, w.value(), b.value());
    }

    println!("Training finished: w = {:.4}, b = {:.4}", w.value(), b.value());
    Ok(())
}
