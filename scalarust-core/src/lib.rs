//! Scalar reverse-mode automatic differentiation.
//!
//! Arithmetic on [`Scalar`] handles builds a computation graph as it evaluates;
//! [`Scalar::backward`] then computes the gradient of that node with respect to
//! every node it depends on.
//!
//! ```
//! use scalarust_core::Scalar;
//!
//! let a = Scalar::new(-4.0);
//! let b = Scalar::new(2.0);
//! let c = &(&a * &b) * &b;
//! c.backward();
//! assert_eq!(a.gradient(), 4.0);
//! assert_eq!(b.gradient(), -16.0);
//! ```

// Declare the main modules of the crate
pub mod autograd;
pub mod ops;
pub mod scalar;
pub mod scalar_data;

pub mod nn;
pub mod optim;
pub mod utils;

pub mod error;

// Re-export the Scalar type so it is reachable as `scalarust_core::Scalar`
pub use scalar::Scalar;
pub use error::ScalaRustError;
// Re-export traits required by public functions/structs
pub use num_traits;
