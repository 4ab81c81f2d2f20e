pub mod linear;

pub use linear::LinearLayer;
