use ndarray::{Array2, Axis};
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::Rng;

/// Standard-normal matrix scaled by a constant factor. Small scales keep
/// initial pre-activations near zero, where the sigmoid is roughly linear
/// and its derivative is far from saturation.
pub fn scaled_normal<R: Rng>(rows: usize, cols: usize, scale: f64, rng: &mut R) -> Array2<f64> {
    Array2::<f64>::random_using((rows, cols), StandardNormal, rng) * scale
}

/// Sum over the batch axis, keeping a (1 x cols) row so the result can be
/// added to a bias row directly.
pub fn column_sum(m: &Array2<f64>) -> Array2<f64> {
    m.sum_axis(Axis(0)).insert_axis(Axis(0))
}
