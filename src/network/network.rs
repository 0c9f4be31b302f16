use rand::Rng;

use crate::data::data_set::DataSet;
use crate::error::{DigitError, Result};
use crate::eval::report::ClassificationReport;
use crate::layers::dense::Layer;
use crate::math::vector::argmax;
use crate::network::init::InitRanges;
use crate::network::topology::Topology;
use crate::train::loop_fn::{train_loop, TrainSummary};
use crate::train::train_config::TrainConfig;

/// Which step of a training iteration ran last.
///
/// `backward` needs the activations of the preceding `forward`, and
/// `update_weights` needs the error signals of the preceding `backward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Idle,
    Forward,
    Backward,
}

/// Multilayer perceptron with sigmoid activations on every non-input layer.
///
/// Layer 0 only holds the copied input; `layers[i]` is topology layer `i + 1`.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    input: Vec<f64>,
    layers: Vec<Layer>,
    pass: Pass,
}

impl Network {
    /// Builds a network with weights and biases drawn from `ranges`.
    pub fn new<R: Rng + ?Sized>(topology: Topology, ranges: &InitRanges, rng: &mut R) -> Result<Network> {
        ranges.validate()?;
        let layers = topology
            .sizes()
            .windows(2)
            .map(|pair| Layer::new(pair[1], pair[0], ranges, rng))
            .collect();
        Ok(Network::with_layers(topology, layers))
    }

    /// Builds a network whose weights and biases are all zero.
    pub fn zeroed(topology: Topology) -> Network {
        let layers = topology
            .sizes()
            .windows(2)
            .map(|pair| Layer::zeroed(pair[1], pair[0]))
            .collect();
        Network::with_layers(topology, layers)
    }

    fn with_layers(topology: Topology, layers: Vec<Layer>) -> Network {
        Network {
            input: vec![0.0; topology.input_size()],
            topology,
            layers,
            pass: Pass::Idle,
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn input_size(&self) -> usize {
        self.topology.input_size()
    }

    pub fn output_size(&self) -> usize {
        self.topology.output_size()
    }

    /// Non-input layers, from the first hidden layer to the output layer.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    /// Forward pass; stores activations and derivatives in each layer for backprop.
    pub fn forward(&mut self, input: &[f64]) -> Result<&[f64]> {
        if input.len() != self.input_size() {
            return Err(DigitError::invalid(format!(
                "input has {} values, network expects {}",
                input.len(),
                self.input_size()
            )));
        }
        self.input.copy_from_slice(input);
        for i in 0..self.layers.len() {
            let (previous, rest) = self.layers.split_at_mut(i);
            let source = previous.last().map_or(self.input.as_slice(), |l| l.activations());
            rest[0].feed_from(source);
        }
        self.pass = Pass::Forward;
        Ok(self.output())
    }

    /// Computes error signals for `target`, from the output layer backwards.
    ///
    /// Must directly follow a `forward` call on the matching input.
    pub fn backward(&mut self, target: &[f64]) -> Result<()> {
        if self.pass != Pass::Forward {
            return Err(DigitError::invalid("backward requires a preceding forward pass"));
        }
        if target.len() != self.output_size() {
            return Err(DigitError::invalid(format!(
                "target has {} values, network outputs {}",
                target.len(),
                self.output_size()
            )));
        }

        let last = self.layers.len() - 1;
        self.layers[last].set_output_errors(target);
        for i in (0..last).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            head[i].propagate_errors_from(&tail[0]);
        }
        self.pass = Pass::Backward;
        Ok(())
    }

    /// Applies one gradient descent step from the last `backward` call.
    pub fn update_weights(&mut self, learning_rate: f64) -> Result<()> {
        if self.pass != Pass::Backward {
            return Err(DigitError::invalid("update_weights requires a preceding backward pass"));
        }
        if !learning_rate.is_finite() {
            return Err(DigitError::invalid(format!("learning rate {} is not finite", learning_rate)));
        }

        for i in 0..self.layers.len() {
            let (previous, rest) = self.layers.split_at_mut(i);
            let source = previous.last().map_or(self.input.as_slice(), |l| l.activations());
            rest[0].apply_update(learning_rate, source);
        }
        // Stored activations no longer match the updated weights.
        self.pass = Pass::Idle;
        Ok(())
    }

    /// Output activations of the most recent forward pass.
    pub fn output(&self) -> &[f64] {
        self.layers
            .last()
            .map_or(self.input.as_slice(), |l| l.activations())
    }

    /// Inference without touching the training buffers.
    pub fn run(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size() {
            return Err(DigitError::invalid(format!(
                "input has {} values, network expects {}",
                input.len(),
                self.input_size()
            )));
        }
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.compute(&current);
        }
        Ok(current)
    }

    /// Index of the strongest output for `input`.
    pub fn predict(&self, input: &[f64]) -> Result<usize> {
        Ok(argmax(&self.run(input)?))
    }

    /// Trains with random mini-batches drawn from `dataset`.
    pub fn train<R: Rng + ?Sized>(&mut self, dataset: &DataSet, config: &TrainConfig, rng: &mut R) -> Result<TrainSummary> {
        train_loop(self, dataset, config, rng)
    }

    /// Counts samples whose strongest output matches the strongest expected output.
    pub fn evaluate(&mut self, dataset: &DataSet) -> Result<ClassificationReport> {
        self.check_dataset(dataset)?;
        let mut report = ClassificationReport::default();
        for sample in dataset {
            let predicted = argmax(self.forward(&sample.input)?);
            report.record(predicted == argmax(&sample.output));
        }
        Ok(report)
    }

    pub(crate) fn check_dataset(&self, dataset: &DataSet) -> Result<()> {
        if dataset.input_size() != self.input_size() || dataset.output_size() != self.output_size() {
            return Err(DigitError::invalid(format!(
                "dataset of shape ({}, {}) does not fit network {:?}",
                dataset.input_size(),
                dataset.output_size(),
                self.topology.sizes()
            )));
        }
        Ok(())
    }
}
