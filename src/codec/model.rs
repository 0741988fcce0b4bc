use crate::codec::weights::encode_weights;
use crate::error::CodecError;
use crate::layers::dense::Layer;
use crate::network::config::NetworkConfig;

pub const MODEL_SEPARATOR: char = '*';

/// `<inputSize>*<outputSize>*<hiddenLayers>*<weightsText>`.
pub fn encode_model(layers: &[Layer]) -> String {
    let input_size = layers.first().map_or(0, Layer::size);
    let output_size = layers.last().map_or(0, Layer::size);
    let hidden_layers = layers.len().saturating_sub(2);
    format!(
        "{input_size}{sep}{output_size}{sep}{hidden_layers}{sep}{weights}",
        sep = MODEL_SEPARATOR,
        weights = encode_weights(layers),
    )
}

/// Splits a model string into the topology it describes (with the default
/// learning rate) and its still-encoded weights text.
pub fn decode_model(text: &str) -> Result<(NetworkConfig, &str), CodecError> {
    let mut fields = text.splitn(4, MODEL_SEPARATOR);
    let mut size = |name: &str| -> Result<usize, CodecError> {
        let field = fields.next()
            .ok_or_else(|| CodecError::MalformedModel(format!("missing {name}")))?;
        field.trim().parse::<usize>().map_err(|_| {
            CodecError::MalformedModel(format!("{name} `{field}` is not a non-negative integer"))
        })
    };
    let input_size = size("input size")?;
    let output_size = size("output size")?;
    let hidden_layers = size("hidden layer count")?;
    let weights = fields.next()
        .ok_or_else(|| CodecError::MalformedModel("missing weights".to_string()))?;

    let config = NetworkConfig::new(input_size, output_size).with_hidden_layers(hidden_layers);
    Ok((config, weights))
}
