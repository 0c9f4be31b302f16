use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of classifying a labelled set: how many predictions matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub correct: usize,
    pub total: usize,
}

impl ClassificationReport {
    pub fn new(correct: usize, total: usize) -> Self {
        ClassificationReport { correct, total }
    }

    /// `correct / total`, or `0.0` when nothing was classified.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    /// Records one prediction.
    pub fn record(&mut self, hit: bool) {
        self.total += 1;
        if hit {
            self.correct += 1;
        }
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correct Predictions: {} out of {}", self.correct, self.total)?;
        write!(f, "Accuracy: {}", self.accuracy())
    }
}
