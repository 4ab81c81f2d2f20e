//! Elementwise and reduction primitives over plain `f64` slices.
//!
//! Every binary operation requires equal lengths and returns
//! `NetError::DimensionMismatch` otherwise; nothing is truncated or padded.

use crate::error::{ensure_same_len, NetError};
use crate::math::matrix::Matrix;

/// Sum of elementwise products.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64, NetError> {
    ensure_same_len("dot", a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Elementwise (Hadamard) product.
pub fn elementwise_multiply(a: &[f64], b: &[f64]) -> Result<Vec<f64>, NetError> {
    ensure_same_len("elementwise_multiply", a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).collect())
}

/// `a - b`, elementwise.
pub fn subtract(a: &[f64], b: &[f64]) -> Result<Vec<f64>, NetError> {
    ensure_same_len("subtract", a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x - y).collect())
}

pub fn scale(v: &[f64], k: f64) -> Vec<f64> {
    v.iter().map(|x| x * k).collect()
}

/// Matrix with `a.len()` rows and `b.len()` columns, `[i][j] = a[i] * b[j]`.
/// The two lengths are independent.
pub fn outer_product(a: &[f64], b: &[f64]) -> Matrix {
    Matrix {
        rows: a.len(),
        cols: b.len(),
        data: a.iter().map(|x| b.iter().map(|y| x * y).collect()).collect(),
    }
}

/// 1.0 where `v[i] > threshold`, 0.0 elsewhere (NaN compares false).
pub fn greater_than(v: &[f64], threshold: f64) -> Vec<f64> {
    v.iter().map(|&x| if x > threshold { 1.0 } else { 0.0 }).collect()
}
