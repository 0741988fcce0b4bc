use thiserror::Error;

use crate::network::id::EdgeId;

/// Failures while decoding weights text or a model string.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The weights text is not a JSON array of `[id, weight]` pairs.
    /// Raised before any entry is applied.
    #[error("weights text is not a list of [id, weight] pairs: {0}")]
    Json(#[from] serde_json::Error),

    #[error("edge id `{0}` is not of the form <source>:<layer>:<neuron>")]
    MalformedEdgeId(String),

    /// A decoded entry names an edge the network does not have. Entries
    /// applied before it keep their new weights.
    #[error("edge {0} does not exist in this network")]
    EdgeOutOfRange(EdgeId),

    #[error("malformed model string: {0}")]
    MalformedModel(String),
}

/// Failures surfaced by a background training run.
#[derive(Error, Debug)]
pub enum TrainError {
    #[error("training thread panicked before reporting completion")]
    WorkerPanicked,

    #[error("training thread exited without reporting completion")]
    Disconnected,
}
