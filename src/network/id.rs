use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::error::CodecError;

/// Position of a neuron: `<layer>:<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeuronId {
    pub layer: usize,
    pub index: usize,
}

impl NeuronId {
    pub fn new(layer: usize, index: usize) -> NeuronId {
        NeuronId { layer, index }
    }
}

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.layer, self.index)
    }
}

/// Network-wide address of an edge: `<source>:<layer>:<neuron>`.
///
/// `source` indexes the previous layer, `layer` and `neuron` locate the
/// destination. Together they find the edge without walking the graph:
/// `layers[layer].neurons[neuron].edges[source]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId {
    pub source: usize,
    pub layer: usize,
    pub neuron: usize,
}

impl EdgeId {
    pub fn new(source: usize, destination: NeuronId) -> EdgeId {
        EdgeId { source, layer: destination.layer, neuron: destination.index }
    }

    pub fn destination(&self) -> NeuronId {
        NeuronId::new(self.layer, self.neuron)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.layer, self.neuron)
    }
}

impl FromStr for EdgeId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<EdgeId, CodecError> {
        let malformed = || CodecError::MalformedEdgeId(s.to_string());
        let mut parts = s.split(':');
        let mut next = || -> Result<usize, CodecError> {
            parts.next()
                .ok_or_else(malformed)?
                .trim()
                .parse::<usize>()
                .map_err(|_| malformed())
        };
        let source = next()?;
        let layer = next()?;
        let neuron = next()?;
        if parts.next().is_some() {
            return Err(malformed());
        }
        Ok(EdgeId { source, layer, neuron })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_id_renders_source_first() {
        let id = EdgeId::new(4, NeuronId::new(2, 1));
        assert_eq!(id.to_string(), "4:2:1");
        assert_eq!(id.destination().to_string(), "2:1");
    }

    #[test]
    fn edge_id_parses_its_own_rendering() {
        let id: EdgeId = "0:1:2".parse().unwrap();
        assert_eq!(id, EdgeId { source: 0, layer: 1, neuron: 2 });
    }

    #[test]
    fn edge_id_rejects_wrong_arity_and_junk() {
        for bad in ["", "1:2", "1:2:3:4", "a:1:2", "-1:1:0", "1::2"] {
            assert!(
                matches!(bad.parse::<EdgeId>(), Err(CodecError::MalformedEdgeId(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
