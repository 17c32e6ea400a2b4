/// Binary cross-entropy between ground-truth labels and predicted
/// probabilities, summed over the sequence.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Computes the scalar cross-entropy loss:
    ///   L = sum(-(y[i]·ln(p[i]) + (1 - y[i])·ln(1 - p[i])))
    ///
    /// `labels`        — ground-truth classes, each 0.0 or 1.0
    /// `probabilities` — predicted probabilities, strictly inside (0, 1),
    ///                   aligned index-for-index with `labels`
    ///
    /// A probability of exactly 0 or 1 puts a zero inside ln() and the
    /// result is non-finite; callers pass in-range values.
    pub fn loss(labels: &[f64], probabilities: &[f64]) -> f64 {
        labels.iter().zip(probabilities.iter())
            .map(|(y, p)| -(y * p.ln() + (1.0 - y) * (1.0 - p).ln()))
            .sum()
    }

    /// Per-probability gradient: (p - y) / (p·(1 - p))
    pub fn derivative(labels: &[f64], probabilities: &[f64]) -> Vec<f64> {
        labels.iter().zip(probabilities.iter())
            .map(|(y, p)| (p - y) / (p * (1.0 - p)))
            .collect()
    }
}
