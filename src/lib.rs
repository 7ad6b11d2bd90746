extern crate plotters;

pub mod core;
pub mod error;
pub mod models;
pub mod prelude;
pub mod utils;

// Re-export types
pub use crate::core::{mean_squared_error, sigmoid, sigmoid_derivative, Normalization};
pub use crate::error::{NNError, Result};
pub use crate::models::FeedforwardNetwork;

pub mod plot {
    pub mod plot_comparison;
}
