// src/nn/mod.rs
// Building blocks for training: parameter initialization and losses.

pub mod init;
pub mod losses;

// Re-export common items
pub use losses::{MSELoss, Reduction};
