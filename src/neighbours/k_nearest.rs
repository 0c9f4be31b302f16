use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{DigitError, Result};
use crate::math::distance::DistanceMetric;
use crate::neighbours::LabelledPoints;

/// Neighbour count used when none is configured.
pub const DEFAULT_K: usize = 3;

/// A retained training point, ordered by distance so the heap top is the farthest.
#[derive(Debug, Clone, Copy)]
struct Neighbour {
    distance: f64,
    label: i32,
}

impl PartialEq for Neighbour {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Neighbour {}

impl PartialOrd for Neighbour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbour {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

/// Majority label among the `k` training points closest to `point`.
///
/// A bounded max-heap keeps the `k` smallest distances seen so far: a new
/// point only evicts the current farthest one when it is strictly closer.
pub fn k_nearest_label(
    training: &LabelledPoints,
    point: &[f64],
    k: usize,
    metric: DistanceMetric,
) -> Result<i32> {
    if k == 0 {
        return Err(DigitError::invalid("k must be at least 1"));
    }

    let mut heap: BinaryHeap<Neighbour> = BinaryHeap::with_capacity(k + 1);
    for (features, &label) in training.features.iter().zip(training.labels.iter()) {
        let distance = metric.distance(features, point)?;
        if heap.len() < k {
            heap.push(Neighbour { distance, label });
        } else if heap.peek().map_or(false, |farthest| farthest.distance > distance) {
            heap.pop();
            heap.push(Neighbour { distance, label });
        }
    }

    most_common_label(heap.into_sorted_vec())
        .ok_or_else(|| DigitError::invalid("no training points to compare against"))
}

/// Most frequent label among `neighbours`, which arrive nearest first.
///
/// When several labels share the top count the one seen first wins, i.e. the
/// label owning the nearest of the tied neighbours.
fn most_common_label(neighbours: Vec<Neighbour>) -> Option<i32> {
    let mut counts: Vec<(i32, usize)> = Vec::new();
    for neighbour in &neighbours {
        match counts.iter_mut().find(|(label, _)| *label == neighbour.label) {
            Some((_, count)) => *count += 1,
            None => counts.push((neighbour.label, 1)),
        }
    }

    let mut best: Option<(i32, usize)> = None;
    for (label, count) in counts {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(rows: &[Vec<i32>]) -> LabelledPoints {
        LabelledPoints::from_rows(rows).unwrap()
    }

    #[test]
    fn majority_of_three_wins_over_single_nearest() {
        // Nearest point says 9, but the next two both say 4.
        let training = points(&[
            vec![1, 0, 9],
            vec![2, 0, 4],
            vec![-2, 0, 4],
            vec![50, 50, 9],
        ]);
        let predicted = k_nearest_label(&training, &[0.0, 0.0], DEFAULT_K, DistanceMetric::Euclidean).unwrap();
        assert_eq!(predicted, 4);
    }

    #[test]
    fn far_points_are_evicted() {
        // The first three scanned points are far away and must all be replaced.
        let training = points(&[
            vec![100, 100, 1],
            vec![101, 100, 1],
            vec![100, 101, 1],
            vec![0, 1, 6],
            vec![1, 0, 6],
            vec![1, 1, 6],
        ]);
        let predicted = k_nearest_label(&training, &[0.0, 0.0], 3, DistanceMetric::Euclidean).unwrap();
        assert_eq!(predicted, 6);
    }

    #[test]
    fn k_larger_than_training_set_uses_everything() {
        let training = points(&[vec![0, 0, 2], vec![5, 5, 2], vec![1, 1, 3]]);
        let predicted = k_nearest_label(&training, &[0.0, 0.0], 10, DistanceMetric::Euclidean).unwrap();
        assert_eq!(predicted, 2);
    }

    #[test]
    fn exact_match_with_k_one() {
        let training = points(&[vec![3, 3, 3, 5], vec![0, 0, 0, 8]]);
        assert_eq!(k_nearest_label(&training, &[3.0, 3.0, 3.0], 1, DistanceMetric::Euclidean).unwrap(), 5);
    }

    #[test]
    fn frequency_tie_picks_one_of_the_tied_labels() {
        // Three distinct labels, one vote each: the winner depends on the
        // tie-break order, so only check that it is one of them.
        let training = points(&[vec![1, 0, 1], vec![0, 2, 2], vec![3, 0, 3], vec![40, 40, 4]]);
        let predicted = k_nearest_label(&training, &[0.0, 0.0], 3, DistanceMetric::Euclidean).unwrap();
        assert!([1, 2, 3].contains(&predicted));
    }

    #[test]
    fn zero_k_is_rejected() {
        let training = points(&[vec![0, 0, 1]]);
        assert!(matches!(
            k_nearest_label(&training, &[0.0], 0, DistanceMetric::Euclidean),
            Err(DigitError::InvalidArgument(_))
        ));
    }

    #[test]
    fn most_common_label_counts_votes() {
        let near = |distance, label| Neighbour { distance, label };
        assert_eq!(most_common_label(vec![near(0.1, 2), near(0.2, 7), near(0.3, 7)]), Some(7));
        assert_eq!(most_common_label(vec![]), None);
    }
}
