pub mod experiment;

pub use experiment::{ExperimentConfig, Hyperparams};
