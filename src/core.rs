// src/core.rs
pub mod activations;
pub mod losses;
pub mod normalization;

// Re-export commonly used items
pub use activations::{sigmoid, sigmoid_derivative};
pub use losses::mean_squared_error;
pub use normalization::Normalization;
