pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod train;
pub mod data;
pub mod neighbours;
pub mod eval;
pub mod config;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::distance::DistanceMetric;
pub use math::vector::argmax;
pub use activation::sigmoid::Sigmoid;
pub use layers::dense::Layer;
pub use network::{InitRanges, Network, Topology};
pub use loss::mse::MseLoss;
pub use train::{train_loop, EpochStats, TrainConfig, TrainSummary};
pub use data::{read_dataset, DataSet, Sample};
pub use neighbours::{two_fold, LabelledPoints, NeighbourClassifier, TwoFoldReport};
pub use eval::ClassificationReport;
pub use config::{ExperimentConfig, Hyperparams};
pub use error::{DigitError, Result};
