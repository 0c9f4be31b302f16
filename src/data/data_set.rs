use rand::Rng;

use crate::error::{DigitError, Result};
use crate::math::vector::one_hot;

/// One input vector paired with its expected (one-hot) output.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub output: Vec<f64>,
}

/// Samples of a fixed input and output width.
///
/// Only grows through `add`, which checks both widths, so every stored sample
/// matches `input_size` / `output_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    input_size: usize,
    output_size: usize,
    samples: Vec<Sample>,
}

impl DataSet {
    pub fn new(input_size: usize, output_size: usize) -> DataSet {
        DataSet {
            input_size,
            output_size,
            samples: Vec::new(),
        }
    }

    /// Builds a dataset from raw rows laid out as `features..., label`.
    ///
    /// The trailing label is one-hot encoded into `n_classes` outputs.
    pub fn from_rows(rows: &[Vec<i32>], n_classes: usize) -> Result<DataSet> {
        let width = match rows.first() {
            Some(row) if row.len() >= 2 => row.len(),
            Some(row) => {
                return Err(DigitError::invalid(format!(
                    "rows need at least one feature and a label, got {} column(s)",
                    row.len()
                )))
            }
            None => return Err(DigitError::invalid("cannot build a dataset from zero rows")),
        };

        let mut set = DataSet::new(width - 1, n_classes);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(DigitError::invalid(format!(
                    "row {} has {} columns, expected {}",
                    i + 1,
                    row.len(),
                    width
                )));
            }
            let (features, label) = row.split_at(width - 1);
            let label = label[0];
            if label < 0 || label as usize >= n_classes {
                return Err(DigitError::invalid(format!(
                    "row {}: label {} is outside 0..{}",
                    i + 1,
                    label,
                    n_classes
                )));
            }
            let input = features.iter().map(|&v| v as f64).collect();
            set.add(input, one_hot(label as usize, n_classes))?;
        }
        Ok(set)
    }

    /// Appends a sample after checking both vector widths.
    pub fn add(&mut self, input: Vec<f64>, expected: Vec<f64>) -> Result<()> {
        if input.len() != self.input_size || expected.len() != self.output_size {
            return Err(DigitError::invalid(format!(
                "sample of shape ({}, {}) does not fit dataset of shape ({}, {})",
                input.len(),
                expected.len(),
                self.input_size,
                self.output_size
            )));
        }
        self.samples.push(Sample { input, output: expected });
        Ok(())
    }

    /// Draws `size` distinct samples uniformly at random into a new dataset.
    ///
    /// A `size` of zero or larger than the dataset yields an empty dataset
    /// rather than an error. Indices are drawn with rejection, so no sample
    /// appears twice in one batch.
    pub fn extract_batch<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> DataSet {
        let mut batch = DataSet::new(self.input_size, self.output_size);
        if size == 0 || size > self.samples.len() {
            return batch;
        }

        let mut taken = vec![false; self.samples.len()];
        batch.samples.reserve(size);
        while batch.samples.len() < size {
            let idx = rng.gen_range(0..self.samples.len());
            if taken[idx] {
                continue;
            }
            taken[idx] = true;
            batch.samples.push(self.samples[idx].clone());
        }
        batch
    }

    /// Returns `(input, expected_output)` for the sample at `index`.
    pub fn get(&self, index: usize) -> Result<(&[f64], &[f64])> {
        let sample = self.sample(index)?;
        Ok((&sample.input, &sample.output))
    }

    pub fn input(&self, index: usize) -> Result<&[f64]> {
        Ok(&self.sample(index)?.input)
    }

    pub fn output(&self, index: usize) -> Result<&[f64]> {
        Ok(&self.sample(index)?.output)
    }

    fn sample(&self, index: usize) -> Result<&Sample> {
        self.samples.get(index).ok_or(DigitError::OutOfRange {
            index,
            len: self.samples.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    #[inline]
    pub fn output_size(&self) -> usize {
        self.output_size
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    /// Dataset whose first input value is a unique marker per sample.
    fn tagged(n: usize) -> DataSet {
        let mut set = DataSet::new(2, 1);
        for i in 0..n {
            set.add(vec![i as f64, 0.5], vec![1.0]).unwrap();
        }
        set
    }

    #[test]
    fn add_then_get_round_trips() {
        let mut set = DataSet::new(3, 2);
        set.add(vec![1.0, 2.0, 3.0], vec![0.0, 1.0]).unwrap();
        set.add(vec![4.0, 5.0, 6.0], vec![1.0, 0.0]).unwrap();
        assert_eq!(set.len(), 2);
        let (input, output) = set.get(1).unwrap();
        assert_eq!(input, &[4.0, 5.0, 6.0]);
        assert_eq!(output, &[1.0, 0.0]);
        assert_eq!(set.input(0).unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(set.output(0).unwrap(), &[0.0, 1.0]);
    }

    #[test]
    fn add_rejects_wrong_widths() {
        let mut set = DataSet::new(3, 2);
        assert!(matches!(set.add(vec![1.0], vec![0.0, 1.0]), Err(DigitError::InvalidArgument(_))));
        assert!(matches!(set.add(vec![1.0, 2.0, 3.0], vec![1.0]), Err(DigitError::InvalidArgument(_))));
        assert!(set.is_empty());
    }

    #[test]
    fn get_out_of_range() {
        let set = tagged(2);
        assert_eq!(set.get(2).unwrap_err(), DigitError::OutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn batch_has_requested_size_and_no_duplicates() {
        let set = tagged(50);
        let mut rng = StdRng::seed_from_u64(3);
        for size in [1, 7, 32, 50] {
            let batch = set.extract_batch(size, &mut rng);
            assert_eq!(batch.len(), size);
            let mut markers: Vec<i64> = batch.iter().map(|s| s.input[0] as i64).collect();
            markers.sort_unstable();
            markers.dedup();
            assert_eq!(markers.len(), size);
        }
    }

    #[test]
    fn full_batch_is_a_permutation() {
        let set = tagged(10);
        let batch = set.extract_batch(10, &mut StdRng::seed_from_u64(11));
        let mut markers: Vec<i64> = batch.iter().map(|s| s.input[0] as i64).collect();
        markers.sort_unstable();
        assert_eq!(markers, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn batch_out_of_range_is_empty() {
        let set = tagged(5);
        let mut rng = StdRng::seed_from_u64(0);
        let empty = set.extract_batch(0, &mut rng);
        assert!(empty.is_empty());
        assert_eq!(empty.input_size(), 2);
        assert!(set.extract_batch(6, &mut rng).is_empty());
    }

    #[test]
    fn batch_copies_are_independent() {
        let set = tagged(4);
        let mut batch = set.extract_batch(2, &mut StdRng::seed_from_u64(5));
        batch.add(vec![99.0, 0.0], vec![0.0]).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn from_rows_one_hot_encodes_labels() {
        let rows = vec![vec![1, 2, 3, 2], vec![0, 0, 0, 0]];
        let set = DataSet::from_rows(&rows, 4).unwrap();
        assert_eq!(set.input_size(), 3);
        assert_eq!(set.output_size(), 4);
        assert_eq!(set.get(0).unwrap(), (&[1.0, 2.0, 3.0][..], &[0.0, 0.0, 1.0, 0.0][..]));
    }

    #[test]
    fn from_rows_rejects_bad_labels_and_widths() {
        assert!(DataSet::from_rows(&[vec![1, 2, 10]], 10).is_err());
        assert!(DataSet::from_rows(&[vec![1, 2, -1]], 10).is_err());
        assert!(DataSet::from_rows(&[vec![1, 2, 3], vec![1, 3]], 10).is_err());
        assert!(DataSet::from_rows(&[], 10).is_err());
    }
}
