use crate::error::{DigitError, Result};
use crate::math::distance::DistanceMetric;
use crate::neighbours::LabelledPoints;

/// Label of the closest training point.
///
/// Only a strictly smaller distance replaces the current best, so the first
/// of several equally close points wins.
pub fn nearest_label(training: &LabelledPoints, point: &[f64], metric: DistanceMetric) -> Result<i32> {
    let mut best: Option<(f64, i32)> = None;
    for (features, &label) in training.features.iter().zip(training.labels.iter()) {
        let distance = metric.distance(features, point)?;
        match best {
            Some((nearest, _)) if distance >= nearest => {}
            _ => best = Some((distance, label)),
        }
    }
    best.map(|(_, label)| label)
        .ok_or_else(|| DigitError::invalid("no training points to compare against"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(rows: &[Vec<i32>]) -> LabelledPoints {
        LabelledPoints::from_rows(rows).unwrap()
    }

    #[test]
    fn exact_match_predicts_its_label() {
        let training = points(&[vec![0, 0, 0, 4], vec![5, 5, 5, 7], vec![9, 1, 3, 2]]);
        for (features, &label) in training.features.iter().zip(training.labels.iter()) {
            assert_eq!(nearest_label(&training, features, DistanceMetric::Euclidean).unwrap(), label);
        }
    }

    #[test]
    fn ties_go_to_first_encountered() {
        let training = points(&[vec![1, 0, 3], vec![-1, 0, 8]]);
        assert_eq!(nearest_label(&training, &[0.0, 0.0], DistanceMetric::Euclidean).unwrap(), 3);
    }

    #[test]
    fn metric_changes_the_winner() {
        // From the origin: (3, 3) is closer in Euclidean terms (~4.24 vs 5),
        // (0, 5) is closer in Manhattan terms (5 vs 6).
        let training = points(&[vec![3, 3, 1], vec![0, 5, 2]]);
        assert_eq!(nearest_label(&training, &[0.0, 0.0], DistanceMetric::Euclidean).unwrap(), 1);
        assert_eq!(nearest_label(&training, &[0.0, 0.0], DistanceMetric::Manhattan).unwrap(), 2);
    }

    #[test]
    fn wrong_point_width_is_rejected() {
        let training = points(&[vec![1, 2, 0]]);
        assert!(nearest_label(&training, &[1.0], DistanceMetric::Euclidean).is_err());
    }
}
