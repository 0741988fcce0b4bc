pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²) over the paired outputs.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len().min(expected.len());
        if n == 0 {
            return 0.0;
        }
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n as f64
    }

    /// Per-output error signal: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_and_error_signal() {
        assert_eq!(MseLoss::loss(&[1.0, 0.0], &[0.0, 0.0]), 0.5);
        assert_eq!(MseLoss::derivative(&[0.75, 0.25], &[1.0, 0.0]), vec![-0.25, 0.25]);
    }

    #[test]
    fn unpaired_outputs_are_skipped() {
        assert_eq!(MseLoss::derivative(&[0.5, 0.5], &[1.0]), vec![-0.5]);
        assert_eq!(MseLoss::loss(&[0.5, 0.5], &[]), 0.0);
    }
}
