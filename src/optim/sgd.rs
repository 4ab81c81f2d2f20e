use crate::{error::NetError, math::{matrix::Matrix, vector}};

/// Plain stochastic gradient descent: `w -= learning_rate * grad`.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Returns `weights - learning_rate * grad`.
    pub fn step_matrix(&self, weights: &Matrix, grad: &Matrix) -> Result<Matrix, NetError> {
        weights.sub(&grad.scale(self.learning_rate))
    }

    pub fn step_vector(&self, weights: &[f64], grad: &[f64]) -> Result<Vec<f64>, NetError> {
        vector::subtract(weights, &vector::scale(grad, self.learning_rate))
    }

    /// Subtracts a correction that already has the learning rate folded in.
    pub fn apply_correction(&self, weights: &Matrix, correction: &Matrix) -> Result<Matrix, NetError> {
        weights.sub(correction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_learning_rate_is_a_no_op() {
        let w = Matrix::from_rows(vec![vec![0.25, -3.0]]).unwrap();
        let g = Matrix::from_rows(vec![vec![1e6, -7.0]]).unwrap();
        assert_eq!(Sgd::new(0.0).step_matrix(&w, &g).unwrap(), w);
        assert_eq!(Sgd::new(0.0).step_vector(&[1.0, 2.0], &[5.0, 5.0]).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn scales_gradient_once() {
        let w = Matrix::from_rows(vec![vec![1.0, 1.0]]).unwrap();
        let g = Matrix::from_rows(vec![vec![2.0, -4.0]]).unwrap();
        let next = Sgd::new(0.5).step_matrix(&w, &g).unwrap();
        assert_eq!(next.data, vec![vec![0.0, 3.0]]);
    }

    #[test]
    fn correction_is_not_rescaled() {
        let w = Matrix::from_rows(vec![vec![1.0]]).unwrap();
        let c = Matrix::from_rows(vec![vec![0.25]]).unwrap();
        assert_eq!(Sgd::new(100.0).apply_correction(&w, &c).unwrap().data, vec![vec![0.75]]);
    }
}
