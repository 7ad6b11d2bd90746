use ndarray::Array2;

/// Mean squared error over every element of the batch, `mean((y - y_hat)^2)`.
///
/// Used as a monitoring signal during training; it never drives control flow.
/// Callers guarantee matching, non-empty shapes (validated at `train` entry).
pub fn mean_squared_error(y: &Array2<f64>, y_hat: &Array2<f64>) -> f64 {
    (y - y_hat).mapv(|e| e * e).mean().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn zero_for_identical_matrices() {
        let y = array![[0.0, 1.0], [1.0, 0.0]];
        assert_eq!(mean_squared_error(&y, &y.clone()), 0.0);
    }

    #[test]
    fn averages_over_all_elements() {
        let y = array![[1.0, 0.0]];
        let y_hat = array![[0.5, 0.5]];
        assert_relative_eq!(mean_squared_error(&y, &y_hat), 0.25);
    }
}
