pub mod matrix;
pub mod rounding;
pub mod vector;

pub use matrix::Matrix;
pub use rounding::Rounding;
