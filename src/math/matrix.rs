use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{ensure_same_len, NetError};
use crate::math::vector;

/// Row-major weight matrix: one row per output unit, one column per input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Builds a matrix from literal rows. Ragged rows are rejected.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix, NetError> {
        let cols = data.first().map_or(0, |row| row.len());
        for row in &data {
            ensure_same_len("Matrix::from_rows", cols, row.len())?;
        }
        Ok(Matrix { rows: data.len(), cols, data })
    }

    /// Uniform draws from `[0, 1)` taken from the caller's random source,
    /// row by row.
    pub fn random_uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        }
    }

    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    /// Per-row dot product with `input`: `out[i] = dot(row_i, input)`.
    pub fn matvec(&self, input: &[f64]) -> Result<Vec<f64>, NetError> {
        ensure_same_len("Matrix::matvec", self.cols, input.len())?;
        self.data.iter().map(|row| vector::dot(input, row)).collect()
    }

    /// Elementwise `self - rhs`; both shapes must agree exactly.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, NetError> {
        ensure_same_len("Matrix::sub (rows)", self.rows, rhs.rows)?;
        ensure_same_len("Matrix::sub (cols)", self.cols, rhs.cols)?;

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(a, b)| vector::subtract(a, b))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, NetError::DimensionMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn matvec_is_a_dot_product_per_row() {
        let m = Matrix::from_rows(vec![
            vec![6.2, 8.1, 0.31],
            vec![0.11, 0.23, 0.06],
        ]).unwrap();
        let out = m.matvec(&[30.0, 3.0, 80.0]).unwrap();
        assert!((out[0] - 235.1).abs() < 1e-9);
        assert!((out[1] - 8.79).abs() < 1e-9);
    }

    #[test]
    fn matvec_rejects_wrong_input_length() {
        let m = Matrix::zeros(2, 3);
        assert!(matches!(
            m.matvec(&[1.0, 2.0]),
            Err(NetError::DimensionMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn sub_rejects_shape_mismatch() {
        assert!(Matrix::zeros(2, 3).sub(&Matrix::zeros(3, 2)).is_err());
    }

    #[test]
    fn random_uniform_is_reproducible_from_seed() {
        let a = Matrix::random_uniform(3, 4, &mut StdRng::seed_from_u64(7));
        let b = Matrix::random_uniform(3, 4, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.data.iter().flatten().all(|&x| (0.0..1.0).contains(&x)));
    }
}
