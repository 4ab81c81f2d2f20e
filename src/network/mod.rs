pub mod two_layer;

pub use two_layer::{ForwardCache, TwoLayerGradients, TwoLayerNetwork};
