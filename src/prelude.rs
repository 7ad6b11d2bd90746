pub use serde::{Deserialize, Serialize};

pub use ndarray::*;
pub use ndarray_rand::rand_distr::StandardNormal;
pub use ndarray_rand::RandomExt;

pub use crate::error::*;
pub use crate::models::FeedforwardNetwork;

// Internal re-exports
pub use crate::core::{
    mean_squared_error,
    sigmoid,
    sigmoid_derivative,
    Normalization,
};
pub use crate::utils::{column_sum, scaled_normal};
