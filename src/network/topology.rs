use serde::{Deserialize, Serialize};

use crate::error::{DigitError, Result};

/// Layer sizes from input to output, e.g. `[64, 26, 15, 10]`.
///
/// Holds at least two non-zero entries and cannot be modified once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Topology {
    sizes: Vec<usize>,
}

impl Topology {
    pub fn new(sizes: Vec<usize>) -> Result<Topology> {
        if sizes.len() < 2 {
            return Err(DigitError::invalid(format!(
                "a network needs an input and an output layer, got {} layer(s)",
                sizes.len()
            )));
        }
        if let Some(pos) = sizes.iter().position(|&s| s == 0) {
            return Err(DigitError::invalid(format!("layer {} has no neurons", pos)));
        }
        Ok(Topology { sizes })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of layers including the input layer.
    pub fn depth(&self) -> usize {
        self.sizes.len()
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }
}

/// The 64 → 26 → 15 → 10 digit classifier.
impl Default for Topology {
    fn default() -> Self {
        Topology { sizes: vec![64, 26, 15, 10] }
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = DigitError;

    fn try_from(sizes: Vec<usize>) -> Result<Self> {
        Topology::new(sizes)
    }
}

impl From<Topology> for Vec<usize> {
    fn from(topology: Topology) -> Self {
        topology.sizes
    }
}
