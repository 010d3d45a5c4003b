//! Random initialization of leaf parameters.

use crate::error::ScalaRustError;
use crate::scalar::Scalar;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Creates a leaf drawn uniformly from `[low, high)` using the thread-local RNG.
pub fn uniform(low: f64, high: f64) -> Result<Scalar, ScalaRustError> {
    uniform_with_rng(&mut rand::thread_rng(), low, high)
}

/// Creates a leaf drawn uniformly from `[low, high)` using `rng`.
///
/// # Errors
/// `InvalidDistribution` if the bounds are not finite or `low >= high`.
pub fn uniform_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
) -> Result<Scalar, ScalaRustError> {
    if !(low.is_finite() && high.is_finite()) || low >= high {
        return Err(ScalaRustError::InvalidDistribution {
            distribution: "uniform".to_string(),
            reason: format!("expected finite bounds with low < high, got [{}, {})", low, high),
        });
    }
    let dist = Uniform::new(low, high);
    Ok(Scalar::new(dist.sample(rng)))
}

/// Creates a leaf drawn from `N(mean, std^2)` using the thread-local RNG.
pub fn normal(mean: f64, std: f64) -> Result<Scalar, ScalaRustError> {
    normal_with_rng(&mut rand::thread_rng(), mean, std)
}

/// Creates a leaf drawn from `N(mean, std^2)` using `rng`.
///
/// # Errors
/// `InvalidDistribution` if `std` is negative or not finite.
pub fn normal_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std: f64,
) -> Result<Scalar, ScalaRustError> {
    let dist = Normal::new(mean, std).map_err(|e| ScalaRustError::InvalidDistribution {
        distribution: "normal".to_string(),
        reason: e.to_string(),
    })?;
    Ok(Scalar::new(dist.sample(rng)))
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
