pub mod k_nearest;
pub mod nearest;

use serde::{Deserialize, Serialize};

use crate::error::{DigitError, Result};
use crate::eval::ClassificationReport;
use crate::math::distance::DistanceMetric;

pub use k_nearest::{k_nearest_label, DEFAULT_K};
pub use nearest::nearest_label;

/// Features and labels split out of raw `features..., label` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledPoints {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<i32>,
}

impl LabelledPoints {
    /// Splits every row into its feature vector and trailing label.
    ///
    /// Fails when `rows` is empty, a row has no feature columns, or the rows
    /// disagree on their width.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<LabelledPoints> {
        let width = rows
            .first()
            .map(|row| row.len())
            .ok_or_else(|| DigitError::invalid("dataset has no rows"))?;
        if width < 2 {
            return Err(DigitError::invalid("rows need at least one feature and a label"));
        }

        let mut features = Vec::with_capacity(rows.len());
        let mut labels = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(DigitError::invalid(format!(
                    "row {} has {} columns, expected {}",
                    i + 1,
                    row.len(),
                    width
                )));
            }
            features.push(row[..width - 1].iter().map(|&v| v as f64).collect());
            labels.push(row[width - 1]);
        }
        Ok(LabelledPoints { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.features.first().map(|f| f.len()).unwrap_or(0)
    }
}

/// Which neighbour search decides a test point's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NeighbourClassifier {
    /// Label of the single closest training point.
    Nearest,
    /// Majority label among the `k` closest training points.
    KNearest { k: usize },
}

impl NeighbourClassifier {
    pub fn name(&self) -> String {
        match self {
            NeighbourClassifier::Nearest => "Nearest Neighbour".to_string(),
            NeighbourClassifier::KNearest { k } => format!("{}-Nearest Neighbours", k),
        }
    }

    /// Predicts one point against the training set.
    pub fn classify(&self, training: &LabelledPoints, point: &[f64], metric: DistanceMetric) -> Result<i32> {
        match *self {
            NeighbourClassifier::Nearest => nearest_label(training, point, metric),
            NeighbourClassifier::KNearest { k } => k_nearest_label(training, point, k, metric),
        }
    }

    /// Classifies every test row against the training rows and counts hits.
    pub fn evaluate(
        &self,
        training_rows: &[Vec<i32>],
        testing_rows: &[Vec<i32>],
        metric: DistanceMetric,
    ) -> Result<ClassificationReport> {
        let training = LabelledPoints::from_rows(training_rows)?;
        let testing = LabelledPoints::from_rows(testing_rows)?;
        if training.dimensions() != testing.dimensions() {
            return Err(DigitError::invalid(format!(
                "training rows have {} features but testing rows have {}",
                training.dimensions(),
                testing.dimensions()
            )));
        }

        let mut report = ClassificationReport::default();
        for (point, &label) in testing.features.iter().zip(testing.labels.iter()) {
            let predicted = self.classify(&training, point, metric)?;
            report.record(predicted == label);
        }
        Ok(report)
    }
}

/// Results of evaluating in both directions between two folds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoFoldReport {
    /// Trained on the first fold, tested on the second.
    pub first_to_second: ClassificationReport,
    /// Trained on the second fold, tested on the first.
    pub second_to_first: ClassificationReport,
}

impl TwoFoldReport {
    pub fn mean_accuracy(&self) -> f64 {
        (self.first_to_second.accuracy() + self.second_to_first.accuracy()) / 2.0
    }
}

/// Two-fold evaluation: each fold serves once as training data and once as test data.
pub fn two_fold(
    classifier: NeighbourClassifier,
    first: &[Vec<i32>],
    second: &[Vec<i32>],
    metric: DistanceMetric,
) -> Result<TwoFoldReport> {
    Ok(TwoFoldReport {
        first_to_second: classifier.evaluate(first, second, metric)?,
        second_to_first: classifier.evaluate(second, first, metric)?,
    })
}
