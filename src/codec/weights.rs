use serde_json::{json, Value};

use crate::error::CodecError;
use crate::layers::dense::Layer;
use crate::network::id::EdgeId;

/// One decoded `[edgeId, weight]` pair. The id is kept raw and only parsed
/// when the entry is applied.
pub type WeightEntry = (String, f64);

/// Encodes every edge weight as a JSON array of `[edgeId, weight]` pairs,
/// walking layers, then neurons, then edges. Leaf inputs are not included.
pub fn encode_weights(layers: &[Layer]) -> String {
    let entries = layers.iter()
        .flat_map(|layer| layer.neurons.iter())
        .flat_map(|neuron| neuron.edges().iter())
        .map(|edge| json!([edge.id.to_string(), edge.weight]))
        .collect();
    Value::Array(entries).to_string()
}

/// Decodes the whole weights text up front. Nothing is applied here, so a
/// failure leaves any network untouched.
pub fn decode_weights(text: &str) -> Result<Vec<WeightEntry>, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Writes each entry's weight into the edge its id addresses, in order.
///
/// Ids are not checked ahead of time: the first one that is malformed or
/// names a missing edge stops the walk, and entries before it stay applied.
pub fn apply_weights(layers: &mut [Layer], entries: &[WeightEntry]) -> Result<(), CodecError> {
    for (raw_id, weight) in entries {
        let id: EdgeId = raw_id.parse()?;
        let edge = layers.get_mut(id.layer)
            .and_then(|layer| layer.neurons.get_mut(id.neuron))
            .and_then(|neuron| neuron.edges_mut().get_mut(id.source))
            .ok_or(CodecError::EdgeOutOfRange(id))?;
        edge.weight = *weight;
    }
    Ok(())
}
