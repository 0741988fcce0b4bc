pub mod model;
pub mod weights;

pub use model::{decode_model, encode_model, MODEL_SEPARATOR};
pub use weights::{apply_weights, decode_weights, encode_weights, WeightEntry};
