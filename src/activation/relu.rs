use crate::math::vector;

/// Rectified linear unit, the only hidden-layer nonlinearity.
pub struct Relu;

impl Relu {
    /// Elementwise `max(0, x)`.
    pub fn function(v: &[f64]) -> Vec<f64> {
        v.iter().map(|&x| if x > 0.0 { x } else { 0.0 }).collect()
    }

    /// Unit step evaluated on the relu *output* stored by the forward pass:
    /// 1.0 for units that were active, 0.0 for dead ones.
    pub fn derivative(activated: &[f64]) -> Vec<f64> {
        vector::greater_than(activated, 0.0)
    }
}
