use rand::Rng;
use std::ops::{Index, IndexMut};

/// Row-major matrix backed by a single contiguous buffer.
///
/// In a dense layer `rows` is the layer size and `cols` the size of the
/// previous layer, so `row(n)` holds every incoming weight of neuron `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Fills a matrix with values drawn uniformly from `[low, high)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, low: f64, high: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for value in res.data.iter_mut() {
            *value = uniform(low, high, rng);
        }
        res
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols, "matrix index ({}, {}) out of bounds", row, col);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.rows && col < self.cols, "matrix index ({}, {}) out of bounds", row, col);
        &mut self.data[row * self.cols + col]
    }
}

/// One uniform sample from `[low, high)`; returns `low` when the bounds meet.
pub fn uniform<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    rng.gen::<f64>() * (high - low) + low
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn rows_are_contiguous_slices() {
        let mut m = Matrix::zeros(2, 3);
        m[(1, 2)] = 4.0;
        m.row_mut(0)[1] = -1.0;
        assert_eq!(m.row(0), &[0.0, -1.0, 0.0]);
        assert_eq!(m.row(1), &[0.0, 0.0, 4.0]);
        assert_eq!(m.as_slice().len(), 6);
    }

    #[test]
    fn random_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(10, 10, -0.5, 0.7, &mut rng);
        assert!(m.as_slice().iter().all(|&w| (-0.5..0.7).contains(&w)));
    }

    #[test]
    fn random_is_reproducible_for_a_seed() {
        let a = Matrix::random(3, 4, -1.0, 1.0, &mut StdRng::seed_from_u64(42));
        let b = Matrix::random(3, 4, -1.0, 1.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
