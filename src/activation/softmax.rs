use std::f64::consts::E;

/// Softmax over a whole score vector. Element i of the result equals
///   e^(scores[i]) / sum_j(e^(scores[j]))
/// so the output is a probability distribution over the input positions.
///
/// Softmax cannot be applied element-wise; it normalizes against the full
/// vector. The exponentials are taken on the raw scores (no max-subtraction),
/// so inputs of very large magnitude overflow the exponential.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let total: f64 = scores.iter().map(|z| E.powf(*z)).sum();
    scores.iter().map(|z| E.powf(*z) / total).collect()
}
