pub mod config;
pub mod edge;
pub mod id;
pub mod network;
pub mod neuron;

pub use config::NetworkConfig;
pub use edge::Edge;
pub use id::{EdgeId, NeuronId};
pub use network::{Network, Sample};
pub use neuron::{Neuron, NeuronInputs};
