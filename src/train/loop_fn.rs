use std::time::Instant;

use rand::Rng;

use crate::data::data_set::DataSet;
use crate::error::{DigitError, Result};
use crate::eval::report::ClassificationReport;
use crate::loss::mse::MseLoss;
use crate::math::vector::argmax;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Statistics of every epoch of a finished run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainSummary {
    pub epochs: Vec<EpochStats>,
}

impl TrainSummary {
    pub fn last(&self) -> Option<&EpochStats> {
        self.epochs.last()
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` with per-sample gradient descent over random mini-batches.
///
/// Every epoch draws `config.loops_per_epoch` batches of `config.batch_size`
/// distinct samples from `dataset`; each sample runs forward, backward and
/// one weight update. There is no early stopping: the full budget always runs.
///
/// # Errors
/// `InvalidArgument` if the config is invalid, the batch is larger than the
/// dataset, or the dataset does not fit the network's topology.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    dataset: &DataSet,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainSummary> {
    config.validate()?;
    network.check_dataset(dataset)?;
    if config.batch_size > dataset.len() {
        return Err(DigitError::invalid(format!(
            "batch_size {} exceeds the {} available samples",
            config.batch_size,
            dataset.len()
        )));
    }

    let mut summary = TrainSummary::default();

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let (report, train_loss) = run_one_epoch(network, dataset, config, rng)?;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            samples: report.total,
            train_loss,
            train_accuracy: report.accuracy(),
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if let Some(ref tx) = config.progress_tx {
            // Nobody listening is fine; training still runs to completion.
            let _ = tx.send(stats.clone());
        }
        summary.epochs.push(stats);
    }

    Ok(summary)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Runs one epoch of `loops_per_epoch` mini-batches.
/// Returns the hit count and mean loss over all processed samples.
fn run_one_epoch<R: Rng + ?Sized>(
    network: &mut Network,
    dataset: &DataSet,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<(ClassificationReport, f64)> {
    let mut report = ClassificationReport::default();
    let mut total_loss = 0.0;

    for _ in 0..config.loops_per_epoch {
        let batch = dataset.extract_batch(config.batch_size, rng);
        for sample in &batch {
            let output = network.forward(&sample.input)?;
            total_loss += MseLoss::loss(output, &sample.output);
            report.record(argmax(output) == argmax(&sample.output));

            network.backward(&sample.output)?;
            network.update_weights(config.learning_rate)?;
        }
    }

    let mean_loss = if report.total == 0 { 0.0 } else { total_loss / report.total as f64 };
    Ok((report, mean_loss))
}
