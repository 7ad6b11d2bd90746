use ndarray::Array2;

/// Element-wise logistic sigmoid, `1 / (1 + e^-z)`.
///
/// Saturates instead of failing on large-magnitude inputs: `exp` overflow
/// yields `+inf` and the quotient collapses to `0.0`, underflow yields `1.0`.
pub fn sigmoid(z: &Array2<f64>) -> Array2<f64> {
    z.mapv(|z| 1.0 / (1.0 + (-z).exp()))
}

/// Derivative of the sigmoid expressed in terms of its own output:
/// for `s = sigmoid(z)`, `ds/dz = s * (1 - s)`.
///
/// Takes the *activation* (post-sigmoid value), not the pre-activation, so
/// backpropagation never recomputes `exp`.
pub fn sigmoid_derivative(s: &Array2<f64>) -> Array2<f64> {
    s.mapv(|s| s * (1.0 - s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn sigmoid_range_and_midpoint() {
        let z = array![[-750.0, -10.0, 0.0, 10.0, 750.0]];
        let s = sigmoid(&z);
        for &v in s.iter() {
            assert!(v.is_finite());
            assert!((0.0..=1.0).contains(&v));
        }
        assert_relative_eq!(s[[0, 2]], 0.5);
        // Extreme inputs saturate rather than panic or produce NaN
        assert_eq!(s[[0, 0]], 0.0);
        assert_eq!(s[[0, 4]], 1.0);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let eps = 1e-6;
        for &z in &[-4.0, -1.0, -0.3, 0.0, 0.5, 2.0, 5.0] {
            let z = array![[z]];
            let s = sigmoid(&z);
            let analytic = sigmoid_derivative(&s)[[0, 0]];
            let numeric =
                (sigmoid(&(&z + eps))[[0, 0]] - sigmoid(&(&z - eps))[[0, 0]]) / (2.0 * eps);
            assert_relative_eq!(analytic, numeric, epsilon = 1e-8);
        }
    }

    #[test]
    fn derivative_peaks_at_half() {
        let s = array![[0.5]];
        assert_relative_eq!(sigmoid_derivative(&s)[[0, 0]], 0.25);
    }
}
