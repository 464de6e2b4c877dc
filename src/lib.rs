pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod golden;

// Convenience re-exports
pub use error::{NnError, Result};
pub use math::matrix::Matrix;
pub use math::source::UniformSource;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use golden::{GoldenSpec, GoldenVector};
