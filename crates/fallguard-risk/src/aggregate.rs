//! Combining per-variable normalized values into one magnitude.

/// Euclidean norm of `normalized`, scaled by the norm of an all-ones vector
/// of the same length.
///
/// With every component in `[0, 1]` the result is also in `[0, 1]`. Because
/// components are squared, several simultaneously high inputs push the score
/// up faster than any weighted sum would.
pub fn euclidean_aggregate(normalized: &[f64]) -> f64 {
    if normalized.is_empty() {
        return 0.0;
    }
    let norm = normalized.iter().map(|v| v * v).sum::<f64>().sqrt();
    let max_norm = (normalized.len() as f64).sqrt();
    norm / max_norm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_ones_is_one() {
        assert!((euclidean_aggregate(&[1.0; 6]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn all_zeros_is_zero() {
        assert_eq!(euclidean_aggregate(&[0.0; 6]), 0.0);
        assert_eq!(euclidean_aggregate(&[]), 0.0);
    }

    #[test]
    fn single_extreme_input() {
        let score = euclidean_aggregate(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((score - 1.0 / 6f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn exceeds_mean_when_inputs_are_uneven() {
        let values = [0.9, 0.1, 0.1, 0.1, 0.1, 0.1];
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!(euclidean_aggregate(&values) > mean);
    }
}
