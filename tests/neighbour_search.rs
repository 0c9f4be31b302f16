use std::fs;
use std::path::PathBuf;

use digit_recognition::{
    read_dataset, two_fold, DigitError, DistanceMetric, LabelledPoints, NeighbourClassifier,
};

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("digit-recognition-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

/// Two folds of 2x2 "digits": a bright top row is class 0, a bright bottom row class 1.
const FOLD_A: &str = "16,15,0,1,0\n0,2,14,16,1\n14,16,1,0,0\n1,0,16,13,1\n";
const FOLD_B: &str = "15,16,2,0,0\n\n0,1,15,15,1\n";

#[test]
fn two_fold_on_files() {
    let a = write_temp("fold-a.csv", FOLD_A);
    let b = write_temp("fold-b.csv", FOLD_B);
    let first = read_dataset(a.to_str().unwrap()).unwrap();
    let second = read_dataset(b.to_str().unwrap()).unwrap();
    fs::remove_file(a).unwrap();
    fs::remove_file(b).unwrap();

    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 2);

    for classifier in [NeighbourClassifier::Nearest, NeighbourClassifier::KNearest { k: 1 }] {
        for metric in [DistanceMetric::Euclidean, DistanceMetric::Manhattan] {
            let report = two_fold(classifier, &first, &second, metric).unwrap();
            assert_eq!(report.first_to_second.correct, 2);
            assert_eq!(report.second_to_first.correct, 4);
            assert_eq!(report.mean_accuracy(), 1.0);
        }
    }
}

#[test]
fn knn_outvotes_a_single_close_outlier() {
    // The nearest point is a mislabelled outlier; its two neighbours agree.
    let training = LabelledPoints::from_rows(&[vec![0, 0, 1], vec![3, 0, 0], vec![0, 3, 0]]).unwrap();
    let point = [1.0, 1.0];

    let nearest = NeighbourClassifier::Nearest.classify(&training, &point, DistanceMetric::Euclidean);
    assert_eq!(nearest, Ok(1));

    let knn = NeighbourClassifier::KNearest { k: 3 }.classify(&training, &point, DistanceMetric::Euclidean);
    assert_eq!(knn, Ok(0));
}

#[test]
fn one_nn_recognises_its_own_training_rows() {
    let rows = vec![vec![4, 8, 15, 0], vec![16, 23, 42, 1], vec![1, 1, 2, 3], vec![9, 0, 9, 2]];
    let report = NeighbourClassifier::Nearest
        .evaluate(&rows, &rows, DistanceMetric::Euclidean)
        .unwrap();
    assert_eq!(report.correct, 4);
    assert_eq!(report.accuracy(), 1.0);
}

#[test]
fn mismatched_feature_counts_are_rejected() {
    let err = NeighbourClassifier::Nearest
        .evaluate(&[vec![1, 2, 0]], &[vec![1, 2, 3, 0]], DistanceMetric::Euclidean)
        .unwrap_err();
    assert!(matches!(err, DigitError::InvalidArgument(_)));
}

#[test]
fn missing_dataset_file() {
    assert!(matches!(read_dataset("no/such/dataset.csv"), Err(DigitError::FileNotFound(_))));
}
