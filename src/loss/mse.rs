/// Squared-error loss reported by the trainer.
///
/// Backpropagation already uses `activation - target` as the output error, which
/// is the gradient of half the summed squared error, so this loss is only used
/// for per-epoch reporting.
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        if n == 0.0 {
            return 0.0;
        }
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_squared_differences() {
        assert_eq!(MseLoss::loss(&[1.0, 0.0], &[0.0, 0.0]), 0.5);
        assert_eq!(MseLoss::loss(&[0.5, 0.5], &[0.5, 0.5]), 0.0);
        assert_eq!(MseLoss::loss(&[], &[]), 0.0);
    }
}
