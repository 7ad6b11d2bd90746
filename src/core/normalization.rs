use ndarray::Array2;

/// In-place mapping between an arbitrary `[lb, ub]` range and the unit
/// interval. Sigmoid outputs live in (0, 1), so both inputs and targets get
/// squeezed through `to_unity` before training and predictions come back out
/// through `from_unity`.
pub trait Normalization {
    fn to_unity(&mut self, lb: f64, ub: f64);
    fn from_unity(&mut self, lb: f64, ub: f64);
}

impl Normalization for Array2<f64> {
    fn to_unity(&mut self, lb: f64, ub: f64) {
        let range = ub - lb;
        if range.abs() < f64::EPSILON {
            // Degenerate range: everything collapses to 0.0
            self.fill(0.0);
        } else {
            self.mapv_inplace(|v| (v - lb) / range);
        }
    }

    fn from_unity(&mut self, lb: f64, ub: f64) {
        let range = ub - lb;
        if range.abs() < f64::EPSILON {
            self.fill(lb);
        } else {
            self.mapv_inplace(|v| v * range + lb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn round_trips_through_unity() {
        let original = array![[-1.5], [0.0], [1.5]];
        let mut m = original.clone();
        m.to_unity(-1.5, 1.5);
        assert_relative_eq!(m[[0, 0]], 0.0);
        assert_relative_eq!(m[[1, 0]], 0.5);
        assert_relative_eq!(m[[2, 0]], 1.0);
        m.from_unity(-1.5, 1.5);
        for (&a, &b) in m.iter().zip(original.iter()) {
            assert_relative_eq!(a, b);
        }
    }

    #[test]
    fn degenerate_range_collapses() {
        let mut m = array![[3.0, 7.0]];
        m.to_unity(2.0, 2.0);
        assert_eq!(m, array![[0.0, 0.0]]);
        m.from_unity(2.0, 2.0);
        assert_eq!(m, array![[2.0, 2.0]]);
    }
}
