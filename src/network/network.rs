use std::str::FromStr;

use rand::Rng;
use tracing::{debug, warn};

use crate::activation::activation::ActivationFunction;
use crate::codec::{model, weights};
use crate::error::CodecError;
use crate::layers::dense::Layer;
use crate::loss::mse::MseLoss;
use crate::network::config::NetworkConfig;
use crate::network::neuron;
use crate::optim::sgd::Sgd;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// One training case: `(input, expected output)`.
pub type Sample = (Vec<f64>, Vec<f64>);

/// A dense feed-forward network trained one edge at a time.
///
/// The whole neuron graph is built once by the constructor. Afterwards only
/// edge weights (by training or `set_weights`) and the input leaves change.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
    activation: ActivationFunction,
    optimizer: Sgd,
}

impl Network {
    /// `input_size` leaves, one hidden layer, `output_size` outputs, learning
    /// rate 0.5.
    pub fn new(input_size: usize, output_size: usize) -> Network {
        Network::from_config(&NetworkConfig::new(input_size, output_size))
    }

    pub fn from_config(config: &NetworkConfig) -> Network {
        Network::from_config_with_rng(config, &mut rand::thread_rng())
    }

    /// Builds the network drawing initial weights from `rng`, so seeded runs
    /// are reproducible.
    pub fn from_config_with_rng<R: Rng>(config: &NetworkConfig, rng: &mut R) -> Network {
        let sizes = config.layer_sizes();
        let mut layers = vec![Layer::input(sizes[0])];
        for &size in &sizes[1..] {
            let next = Layer::dense(size, &layers[layers.len() - 1], rng);
            layers.push(next);
        }
        Network {
            layers,
            activation: ActivationFunction::Sigmoid,
            optimizer: Sgd::new(config.learning_rate),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].size()
    }

    pub fn output_size(&self) -> usize {
        self.output_layer().size()
    }

    pub fn hidden_layers(&self) -> usize {
        self.layers.len() - 2
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.optimizer.learning_rate = learning_rate;
    }

    /// Shape of this network as a config, carrying the current learning rate.
    pub fn config(&self) -> NetworkConfig {
        NetworkConfig::new(self.input_size(), self.output_size())
            .with_hidden_layers(self.hidden_layers())
            .with_learning_rate(self.learning_rate())
    }

    fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    /// Sets the external inputs. A slice whose length differs from
    /// `input_size()` is ignored and the previous input stays in place.
    pub fn set_input(&mut self, values: &[f64]) {
        if !self.layers[0].set_input(values) {
            debug!(
                expected = self.input_size(),
                got = values.len(),
                "ignoring input of the wrong length"
            );
        }
    }

    /// Output layer values for the current input.
    ///
    /// Evaluated as one sweep from the input layer forward; nothing is kept
    /// between calls, so every call reflects the current weights and input.
    pub fn prediction(&self) -> Vec<f64> {
        let mut values = Vec::new();
        for layer in &self.layers {
            values = layer.feed_from(&values, self.activation);
        }
        values
    }

    /// `set_input` followed by `prediction`.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        self.set_input(input);
        self.prediction()
    }

    /// One pass over `dataset` in order. For each sample the input is set,
    /// the prediction read, and `prediction[i] - expected[i]` is sent back
    /// from output neuron `i`; each backward step finishes before the next
    /// begins. Outputs without a matching expected value get no error.
    ///
    /// Returns the mean squared error of the predictions read during the
    /// pass, or 0.0 for an empty dataset.
    pub fn train_once(&mut self, dataset: &[Sample]) -> f64 {
        if dataset.is_empty() {
            return 0.0;
        }
        let output_layer = self.layers.len() - 1;
        let mut total_loss = 0.0;

        for (input, expected) in dataset {
            self.set_input(input);
            let prediction = self.prediction();
            total_loss += MseLoss::loss(&prediction, expected);

            for (i, error) in MseLoss::derivative(&prediction, expected).into_iter().enumerate() {
                neuron::propagate_error(
                    &mut self.layers,
                    output_layer,
                    i,
                    error,
                    self.activation,
                    &self.optimizer,
                );
            }
        }

        total_loss / dataset.len() as f64
    }

    /// Runs `train_once` exactly `epochs` times. Returns the last epoch's
    /// mean loss.
    pub fn train(&mut self, dataset: &[Sample], epochs: usize) -> f64 {
        train_loop(self, dataset, &TrainConfig::new(epochs))
    }

    /// Every edge weight as a JSON array of `[edgeId, weight]` pairs.
    pub fn weights(&self) -> String {
        weights::encode_weights(&self.layers)
    }

    /// Applies weights text produced by `weights()`.
    ///
    /// Text that does not decode is logged and rejected with the network
    /// unchanged. An entry naming a missing edge is logged and stops the walk
    /// with `CodecError::EdgeOutOfRange`; entries before it remain applied.
    pub fn set_weights(&mut self, text: &str) -> Result<(), CodecError> {
        let entries = weights::decode_weights(text).map_err(|e| {
            warn!(error = %e, "rejecting weights text, network left unchanged");
            e
        })?;
        weights::apply_weights(&mut self.layers, &entries).map_err(|e| {
            warn!(error = %e, "stopped applying weights text, earlier entries already applied");
            e
        })
    }

    /// `<inputSize>*<outputSize>*<hiddenLayers>*<weights>`.
    ///
    /// The learning rate is not part of the model string.
    pub fn model(&self) -> String {
        model::encode_model(&self.layers)
    }

    /// Rebuilds a network from `model()` output. The learning rate reverts to
    /// the default.
    pub fn from_model(text: &str) -> Result<Network, CodecError> {
        let (config, weights_text) = model::decode_model(text)?;
        let mut network = Network::from_config(&config);
        network.set_weights(weights_text)?;
        Ok(network)
    }
}

impl FromStr for Network {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Network, CodecError> {
        Network::from_model(s)
    }
}
