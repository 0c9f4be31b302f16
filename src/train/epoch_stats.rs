use serde::{Deserialize, Serialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// Aggregated over every sample processed during the epoch, using the
/// network's prediction just before that sample's weight update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Samples processed in this epoch (loops × batch size).
    pub samples: usize,
    /// Mean squared error over those samples.
    pub train_loss: f64,
    /// Fraction of those samples whose argmax matched the target, in [0, 1].
    pub train_accuracy: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
