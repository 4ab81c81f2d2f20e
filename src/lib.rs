pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::NetError;
pub use math::matrix::Matrix;
pub use math::rounding::Rounding;
pub use activation::relu::Relu;
pub use layers::linear::LinearLayer;
pub use network::two_layer::TwoLayerNetwork;
pub use loss::squared_error::SquaredError;
pub use optim::sgd::Sgd;
pub use train::{Dataset, EpochResult, Model, TrainConfig, Trainer, TrainingExample, TrainingOutcome};
