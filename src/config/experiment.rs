use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{DigitError, Result};
use crate::math::distance::DistanceMetric;
use crate::neighbours::k_nearest::DEFAULT_K;
use crate::network::init::InitRanges;
use crate::network::topology::Topology;
use crate::train::train_config::TrainConfig;

/// Training hyperparameters, kept apart from the topology so either can be
/// changed on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparams {
    pub learning_rate: f64,
    pub epochs: usize,
    pub loops_per_epoch: usize,
    pub batch_size: usize,
}

impl Default for Hyperparams {
    fn default() -> Self {
        Hyperparams {
            learning_rate: 0.05,
            epochs: 250,
            loops_per_epoch: 500,
            batch_size: 32,
        }
    }
}

impl Hyperparams {
    pub fn to_train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs, self.loops_per_epoch, self.batch_size, self.learning_rate)
    }
}

/// Everything a full run needs: network shape, initialisation, training
/// hyperparameters and neighbour-search settings.
///
/// Every field has a default, so a JSON file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Layer sizes from input to output.
    pub topology: Topology,
    pub init: InitRanges,
    pub hyperparams: Hyperparams,
    /// Number of classes, i.e. the width of the one-hot outputs.
    pub n_classes: usize,
    /// Neighbours consulted by the k-nearest classifier.
    pub k: usize,
    pub metric: DistanceMetric,
    /// Seed for weight initialisation and batch sampling; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            topology: Topology::default(),
            init: InitRanges::default(),
            hyperparams: Hyperparams::default(),
            n_classes: 10,
            k: DEFAULT_K,
            metric: DistanceMetric::Euclidean,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Deserializes a config from a JSON file.
    pub fn load_json(path: &str) -> Result<ExperimentConfig> {
        let file = std::fs::File::open(path).map_err(|e| DigitError::from_io(e, path))?;
        let reader = std::io::BufReader::new(file);
        let config: ExperimentConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| DigitError::from_io(e, path))?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|e| DigitError::from_io(e, path))
    }

    pub fn validate(&self) -> Result<()> {
        self.init.validate()?;
        self.hyperparams.to_train_config().validate()?;
        if self.topology.output_size() != self.n_classes {
            return Err(DigitError::Config(format!(
                "output layer has {} neurons but there are {} classes",
                self.topology.output_size(),
                self.n_classes
            )));
        }
        if self.k == 0 {
            return Err(DigitError::Config("k must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Random generator for a run, seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
