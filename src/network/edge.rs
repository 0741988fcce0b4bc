use crate::network::id::EdgeId;

/// A weighted connection into a neuron from one neuron of the previous layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub weight: f64,
    /// Index of the source neuron within the previous layer.
    pub source: usize,
    pub id: EdgeId,
}

impl Edge {
    pub fn new(weight: f64, source: usize, id: EdgeId) -> Edge {
        Edge { weight, source, id }
    }
}
