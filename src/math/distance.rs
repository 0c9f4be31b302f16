use serde::{Deserialize, Serialize};

use crate::error::{DigitError, Result};

/// Distance used by the neighbour classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
}

impl DistanceMetric {
    pub fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        match self {
            DistanceMetric::Euclidean => euclidean(a, b),
            DistanceMetric::Manhattan => manhattan(a, b),
        }
    }
}

/// sqrt(Σ (a[i] - b[i])²)
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    let sum: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();
    Ok(sum.sqrt())
}

/// Σ |a[i] - b[i]|
pub fn manhattan(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum())
}

fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(DigitError::invalid(format!(
            "cannot measure distance between vectors of length {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}
