use serde::{Deserialize, Serialize};

use crate::error::{DigitError, Result};

/// Uniform ranges that fresh weights and biases are drawn from.
///
/// Each pair is `(low, high)`; values land in `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitRanges {
    pub weights: (f64, f64),
    pub biases: (f64, f64),
}

impl Default for InitRanges {
    fn default() -> Self {
        InitRanges {
            weights: (-1.0, 1.0),
            biases: (-0.5, 0.7),
        }
    }
}

impl InitRanges {
    pub fn validate(&self) -> Result<()> {
        for (name, (low, high)) in [("weight", self.weights), ("bias", self.biases)] {
            if !low.is_finite() || !high.is_finite() || low > high {
                return Err(DigitError::invalid(format!(
                    "{} range [{}, {}) is not a valid interval",
                    name, low, high
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(InitRanges::default().validate().is_ok());
    }

    #[test]
    fn inverted_or_infinite_ranges_fail() {
        let inverted = InitRanges { weights: (1.0, -1.0), ..Default::default() };
        assert!(inverted.validate().is_err());
        let infinite = InitRanges { biases: (0.0, f64::INFINITY), ..Default::default() };
        assert!(infinite.validate().is_err());
    }
}
