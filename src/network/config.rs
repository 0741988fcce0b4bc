use serde::{Serialize, Deserialize};

pub const DEFAULT_HIDDEN_LAYERS: usize = 1;
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

fn default_hidden_layers() -> usize {
    DEFAULT_HIDDEN_LAYERS
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

/// Shape and learning rate of a network.
///
/// Hidden layer widths are not configurable: every hidden layer gets
/// `min(2·input − 1, ⌈2·input / 3 + output⌉)` neurons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub output_size: usize,
    #[serde(default = "default_hidden_layers")]
    pub hidden_layers: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
}

impl NetworkConfig {
    /// One hidden layer, learning rate 0.5.
    pub fn new(input_size: usize, output_size: usize) -> NetworkConfig {
        NetworkConfig {
            input_size,
            output_size,
            hidden_layers: DEFAULT_HIDDEN_LAYERS,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    pub fn with_hidden_layers(mut self, hidden_layers: usize) -> NetworkConfig {
        self.hidden_layers = hidden_layers;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> NetworkConfig {
        self.learning_rate = learning_rate;
        self
    }

    pub fn hidden_width(&self) -> usize {
        let cap = (2 * self.input_size).saturating_sub(1);
        let heuristic = (2.0 * self.input_size as f64 / 3.0 + self.output_size as f64).ceil() as usize;
        cap.min(heuristic)
    }

    /// Neuron count of every layer, input first.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers + 2);
        sizes.push(self.input_size);
        sizes.extend(std::iter::repeat(self.hidden_width()).take(self.hidden_layers));
        sizes.push(self.output_size);
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_width_takes_the_smaller_bound() {
        assert_eq!(NetworkConfig::new(2, 1).hidden_width(), 3);
        // ceil(6/3 + 1) = 3 < 5
        assert_eq!(NetworkConfig::new(3, 1).hidden_width(), 3);
        // 2·1 − 1 = 1 < ceil(2/3 + 4) = 5
        assert_eq!(NetworkConfig::new(1, 4).hidden_width(), 1);
        assert_eq!(NetworkConfig::new(10, 2).hidden_width(), 9);
    }

    #[test]
    fn layer_sizes_repeat_the_hidden_width() {
        let config = NetworkConfig::new(4, 2).with_hidden_layers(3);
        assert_eq!(config.layer_sizes(), vec![4, 5, 5, 5, 2]);
        assert_eq!(NetworkConfig::new(4, 2).with_hidden_layers(0).layer_sizes(), vec![4, 2]);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: NetworkConfig =
            serde_json::from_str(r#"{"input_size": 2, "output_size": 1}"#).unwrap();
        assert_eq!(config, NetworkConfig::new(2, 1));
    }
}
