use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::network::edge::Edge;
use crate::network::id::{EdgeId, NeuronId};
use crate::network::neuron::Neuron;

/// One rank of neurons. Every non-input layer is densely wired to the one
/// before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: usize,
    pub neurons: Vec<Neuron>,
}

impl Layer {
    /// The external-input layer: `size` leaves holding 0.0.
    pub fn input(size: usize) -> Layer {
        let neurons = (0..size)
            .map(|i| Neuron::leaf(NeuronId::new(0, i)))
            .collect();
        Layer { id: 0, neurons }
    }

    /// A layer of `size` neurons, each with one edge per neuron of
    /// `previous`. Weights are drawn uniformly from [-0.5, 0.5).
    pub fn dense<R: Rng>(size: usize, previous: &Layer, rng: &mut R) -> Layer {
        let id = previous.id + 1;
        let neurons = (0..size)
            .map(|i| {
                let destination = NeuronId::new(id, i);
                let edges = previous.neurons.iter()
                    .map(|source| {
                        let weight = rng.gen::<f64>() - 0.5;
                        Edge::new(weight, source.id.index, EdgeId::new(source.id.index, destination))
                    })
                    .collect();
                Neuron::wired(destination, edges)
            })
            .collect();
        Layer { id, neurons }
    }

    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_input(&self) -> bool {
        self.id == 0
    }

    /// Hands `values` positionally to the leaves. Returns `false`, leaving
    /// every neuron as it was, unless this is the input layer and exactly
    /// one value per neuron is given.
    pub fn set_input(&mut self, values: &[f64]) -> bool {
        if !self.is_input() || values.len() != self.neurons.len() {
            return false;
        }
        for (neuron, &value) in self.neurons.iter_mut().zip(values) {
            neuron.set_input(value);
        }
        true
    }

    /// Evaluates the whole layer from the previous layer's outputs.
    pub fn feed_from(&self, previous: &[f64], activation: ActivationFunction) -> Vec<f64> {
        self.neurons.iter()
            .map(|neuron| neuron.value_from(previous, activation))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn dense_layer_is_fully_wired_with_addressable_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = Layer::input(3);
        let hidden = Layer::dense(2, &input, &mut rng);

        assert_eq!(hidden.id, 1);
        assert_eq!(hidden.size(), 2);
        for (i, neuron) in hidden.neurons.iter().enumerate() {
            assert_eq!(neuron.id.to_string(), format!("1:{i}"));
            assert_eq!(neuron.edges().len(), 3);
            for (s, edge) in neuron.edges().iter().enumerate() {
                assert_eq!(edge.source, s);
                assert_eq!(edge.id.to_string(), format!("{s}:1:{i}"));
                assert!((-0.5..0.5).contains(&edge.weight));
            }
        }
    }

    #[test]
    fn input_requires_exact_length() {
        let mut layer = Layer::input(2);
        assert!(layer.set_input(&[0.25, 0.75]));
        assert!(!layer.set_input(&[1.0]));
        assert!(!layer.set_input(&[1.0, 1.0, 1.0]));
        assert_eq!(layer.feed_from(&[], ActivationFunction::Sigmoid), vec![0.25, 0.75]);
    }

    #[test]
    fn non_input_layer_rejects_external_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = Layer::input(2);
        let mut hidden = Layer::dense(2, &input, &mut rng);
        let before = hidden.clone();
        assert!(!hidden.set_input(&[1.0, 2.0]));
        assert_eq!(hidden, before);
    }
}
