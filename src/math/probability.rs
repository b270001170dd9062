//! Weight renormalization and entropy used for search ordering

/// Renormalize a slice of non-negative weights to sum to one
///
/// Falls back to a uniform distribution when the total is not strictly
/// positive, so a degenerate weight vector never produces NaN downstream.
pub fn normalized_weights(weights: &[f64]) -> Vec<f64> {
    if weights.is_empty() {
        return Vec::new();
    }

    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        weights.iter().map(|w| w / total).collect()
    } else {
        let uniform = 1.0 / weights.len() as f64;
        vec![uniform; weights.len()]
    }
}

/// Shannon entropy in bits of a probability distribution
///
/// Zero-probability entries contribute nothing. A single-outcome
/// distribution has entropy zero, which is what makes determined cells
/// sort first during candidate selection.
pub fn shannon_entropy(probabilities: &[f64]) -> f64 {
    let mut entropy = 0.0;
    for &p in probabilities {
        if p > 0.0 {
            entropy -= p * p.log2();
        }
    }
    entropy
}
