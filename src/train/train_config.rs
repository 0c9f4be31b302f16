use std::sync::mpsc;

use crate::error::{DigitError, Result};
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`         : number of epochs to run
/// - `loops_per_epoch`: mini-batches drawn per epoch
/// - `batch_size`     : distinct samples per mini-batch
/// - `learning_rate`  : step size of every per-sample weight update
/// - `progress_tx`    : optional channel sender; one `EpochStats` is sent per
///                       completed epoch. A dropped receiver is ignored and
///                       training runs to the end.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub loops_per_epoch: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(epochs: usize, loops_per_epoch: usize, batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            loops_per_epoch,
            batch_size,
            learning_rate,
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(DigitError::invalid("batch_size must be at least 1"));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(DigitError::invalid(format!(
                "learning rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_batch_and_bad_learning_rates() {
        assert!(TrainConfig::new(1, 1, 0, 0.05).validate().is_err());
        assert!(TrainConfig::new(1, 1, 4, 0.0).validate().is_err());
        assert!(TrainConfig::new(1, 1, 4, f64::NAN).validate().is_err());
        assert!(TrainConfig::new(0, 0, 4, 0.05).validate().is_ok());
    }
}
