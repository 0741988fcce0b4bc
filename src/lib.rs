pub mod activation;
pub mod codec;
pub mod error;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use error::{CodecError, TrainError};
pub use layers::dense::Layer;
pub use network::config::NetworkConfig;
pub use network::id::{EdgeId, NeuronId};
pub use network::network::{Network, Sample};
pub use optim::sgd::Sgd;
pub use train::{spawn_training, train_loop, EpochStats, TrainConfig, TrainHandle, TrainOutcome};
