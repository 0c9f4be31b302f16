use rand::Rng;

use crate::activation::sigmoid::Sigmoid;
use crate::math::matrix::{uniform, Matrix};
use crate::network::init::InitRanges;

/// A fully connected sigmoid layer.
///
/// `weights` is `size × input_size`: row `n` holds the incoming weights of
/// neuron `n`. Activations, derivatives and error signals are scratch buffers
/// rewritten by every forward and backward pass.
#[derive(Debug, Clone)]
pub struct Layer {
    pub size: usize,
    pub weights: Matrix,
    pub biases: Vec<f64>,
    activations: Vec<f64>,
    derivatives: Vec<f64>,
    errors: Vec<f64>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(size: usize, input_size: usize, ranges: &InitRanges, rng: &mut R) -> Layer {
        let (w_low, w_high) = ranges.weights;
        let (b_low, b_high) = ranges.biases;
        let weights = Matrix::random(size, input_size, w_low, w_high, rng);
        let biases = (0..size).map(|_| uniform(b_low, b_high, rng)).collect();
        Layer::with_parameters(weights, biases)
    }

    /// A layer whose weights and biases are all zero.
    pub fn zeroed(size: usize, input_size: usize) -> Layer {
        Layer::with_parameters(Matrix::zeros(size, input_size), vec![0.0; size])
    }

    fn with_parameters(weights: Matrix, biases: Vec<f64>) -> Layer {
        let size = weights.rows;
        Layer {
            size,
            weights,
            biases,
            activations: vec![0.0; size],
            derivatives: vec![0.0; size],
            errors: vec![0.0; size],
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols
    }

    pub fn activations(&self) -> &[f64] {
        &self.activations
    }

    pub fn derivatives(&self) -> &[f64] {
        &self.derivatives
    }

    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// w·x + b for a single neuron.
    fn weighted_sum(&self, neuron: usize, input: &[f64]) -> f64 {
        let row = self.weights.row(neuron);
        let sum: f64 = row.iter().zip(input.iter()).map(|(w, x)| w * x).sum();
        sum + self.biases[neuron]
    }

    /// Forward pass; stores activations and their derivatives for backprop.
    pub fn feed_from(&mut self, input: &[f64]) {
        for neuron in 0..self.size {
            let out = Sigmoid::function(self.weighted_sum(neuron, input));
            self.activations[neuron] = out;
            self.derivatives[neuron] = Sigmoid::derivative_from_output(out);
        }
    }

    /// Forward pass that leaves the scratch buffers untouched.
    pub fn compute(&self, input: &[f64]) -> Vec<f64> {
        (0..self.size)
            .map(|neuron| Sigmoid::function(self.weighted_sum(neuron, input)))
            .collect()
    }

    /// Output layer error: (activation - target) · derivative.
    pub fn set_output_errors(&mut self, target: &[f64]) {
        for neuron in 0..self.size {
            let difference = self.activations[neuron] - target[neuron];
            self.errors[neuron] = difference * self.derivatives[neuron];
        }
    }

    /// Hidden layer error: (Σ next.w[k][n] · next.err[k]) · derivative[n].
    pub fn propagate_errors_from(&mut self, next: &Layer) {
        for neuron in 0..self.size {
            let sum: f64 = (0..next.size)
                .map(|k| next.weights[(k, neuron)] * next.errors[k])
                .sum();
            self.errors[neuron] = sum * self.derivatives[neuron];
        }
    }

    /// Plain gradient step using the stored error signals.
    ///
    /// `input` must be the activations this layer was last fed from.
    pub fn apply_update(&mut self, learning_rate: f64, input: &[f64]) {
        for neuron in 0..self.size {
            let delta = -learning_rate * self.errors[neuron];
            self.biases[neuron] += delta;
            for (w, x) in self.weights.row_mut(neuron).iter_mut().zip(input.iter()) {
                *w += delta * x;
            }
        }
    }
}
