use crate::activation::activation::ActivationFunction;
use crate::layers::dense::Layer;
use crate::network::edge::Edge;
use crate::network::id::NeuronId;
use crate::optim::sgd::Sgd;

/// What feeds a neuron: an external scalar (first layer only) or one edge per
/// neuron of the previous layer.
#[derive(Debug, Clone, PartialEq)]
pub enum NeuronInputs {
    External(f64),
    Edges(Vec<Edge>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub id: NeuronId,
    pub inputs: NeuronInputs,
}

impl Neuron {
    /// A first-layer leaf holding 0.0 until an input is set.
    pub fn leaf(id: NeuronId) -> Neuron {
        Neuron { id, inputs: NeuronInputs::External(0.0) }
    }

    pub fn wired(id: NeuronId, edges: Vec<Edge>) -> Neuron {
        Neuron { id, inputs: NeuronInputs::Edges(edges) }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.inputs, NeuronInputs::External(_))
    }

    /// Incoming edges; empty for a leaf.
    pub fn edges(&self) -> &[Edge] {
        match &self.inputs {
            NeuronInputs::External(_) => &[],
            NeuronInputs::Edges(edges) => edges,
        }
    }

    pub fn edges_mut(&mut self) -> &mut [Edge] {
        match &mut self.inputs {
            NeuronInputs::External(_) => &mut [],
            NeuronInputs::Edges(edges) => edges,
        }
    }

    /// Overwrites the external scalar. Ignored on anything but a leaf.
    pub fn set_input(&mut self, value: f64) {
        if let NeuronInputs::External(stored) = &mut self.inputs {
            *stored = value;
        }
    }

    /// Σ weight · source value, in edge order, with the source values taken
    /// from an already evaluated previous layer.
    pub fn sum_from(&self, previous: &[f64]) -> f64 {
        self.edges().iter()
            .fold(0.0, |sum, edge| sum + previous[edge.source] * edge.weight)
    }

    /// Value given the previous layer's already computed outputs.
    pub fn value_from(&self, previous: &[f64], activation: ActivationFunction) -> f64 {
        match &self.inputs {
            NeuronInputs::External(value) => *value,
            NeuronInputs::Edges(_) => activation.function(self.sum_from(previous)),
        }
    }

    /// Weighted input sum, recomputing every ancestor from scratch.
    ///
    /// `upstream` holds every layer before this neuron's own.
    pub fn weighted_sum(&self, upstream: &[Layer], activation: ActivationFunction) -> f64 {
        let Some((previous, rest)) = upstream.split_last() else {
            return 0.0;
        };
        self.edges().iter().fold(0.0, |sum, edge| {
            sum + previous.neurons[edge.source].value(rest, activation) * edge.weight
        })
    }

    /// Current output, recomputed through every ancestor with nothing cached.
    pub fn value(&self, upstream: &[Layer], activation: ActivationFunction) -> f64 {
        match &self.inputs {
            NeuronInputs::External(value) => *value,
            NeuronInputs::Edges(_) => activation.function(self.weighted_sum(upstream, activation)),
        }
    }
}

/// Backward step for the neuron at `layers[layer].neurons[index]`.
///
/// For each incoming edge in stored order the weight is stepped first, then
/// the source receives `updated_weight * w_delta` and is fully processed
/// before the next edge. Source values are re-read at that moment, so they
/// already reflect any weights changed earlier in the same pass. Leaves are
/// left untouched.
pub fn propagate_error(
    layers: &mut [Layer],
    layer: usize,
    index: usize,
    error: f64,
    activation: ActivationFunction,
    optimizer: &Sgd,
) {
    if layer == 0 || layer >= layers.len() {
        return;
    }
    let (upstream, rest) = layers.split_at_mut(layer);
    let neuron = &mut rest[0].neurons[index];
    if neuron.is_leaf() {
        return;
    }

    let w_delta = error * activation.derivative(neuron.weighted_sum(upstream, activation));

    for k in 0..neuron.edges().len() {
        let source = neuron.edges()[k].source;
        let source_value = {
            let (previous, rest) = upstream.split_at(layer - 1);
            rest[0].neurons[source].value(previous, activation)
        };

        let edge = &mut neuron.edges_mut()[k];
        edge.weight = optimizer.step(edge.weight, source_value, w_delta);
        let upstream_error = edge.weight * w_delta;

        propagate_error(upstream, layer - 1, source, upstream_error, activation, optimizer);
    }
}
