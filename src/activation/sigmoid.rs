use std::f64::consts::E;

/// Logistic sigmoid: 1 / (1 + e^(-x)). Maps any real input into (0, 1).
///
/// Total over all finite inputs; far from zero the exponential saturates
/// and the result rounds to 0.0 or 1.0.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid at `x`: σ(x)·(1 - σ(x)).
pub fn sigmoid_derivative(x: f64) -> f64 {
    let fx = sigmoid(x);
    fx * (1.0 - fx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_matches_known_values() {
        assert!((sigmoid(1.0) - 0.7310585786300049).abs() < 1e-12);
        assert!((sigmoid(2.0) - 0.8807970779778823).abs() < 1e-12);
        assert!((sigmoid(-1.0) - (1.0 - 0.7310585786300049)).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_stays_strictly_inside_unit_interval() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let x = rng.gen_range(-30.0..30.0);
            let s = sigmoid(x);
            assert!(s > 0.0 && s < 1.0, "sigmoid({x}) = {s} left (0, 1)");
        }
    }

    #[test]
    fn sigmoid_is_monotonically_increasing() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen_range(-30.0..30.0);
            let b = rng.gen_range(-30.0..30.0);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            assert!(sigmoid(lo) <= sigmoid(hi));
        }
    }

    #[test]
    fn derivative_peaks_at_zero_and_is_symmetric() {
        assert!((sigmoid_derivative(0.0) - 0.25).abs() < 1e-12);
        assert!(sigmoid_derivative(1.0) < 0.25);
        assert!(sigmoid_derivative(-1.0) < 0.25);
        assert!((sigmoid_derivative(1.0) - sigmoid_derivative(-1.0)).abs() < 1e-12);
    }
}
