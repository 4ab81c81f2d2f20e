pub mod dataset;
pub mod epoch_result;
pub mod model;
pub mod train_config;
pub mod trainer;

pub use dataset::{zip_dataset, Dataset, TrainingExample};
pub use epoch_result::{EpochResult, TrainingOutcome};
pub use model::Model;
pub use train_config::TrainConfig;
pub use trainer::{Trainer, TrainingState};
