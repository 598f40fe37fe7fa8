use thiserror::Error;

/// Holds the errors raised when a profile, a model, or a run is badly configured
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("layer {layer}: thickness must be > 0.0, got {value}")]
    LayerThickness { layer: usize, value: f64 },

    #[error("layer {layer}: depth increment must be > 0.0, got {value}")]
    Increment { layer: usize, value: f64 },

    #[error("the number of depth increments ({found}) must equal the number of layers ({expected})")]
    IncrementCount { expected: usize, found: usize },

    #[error("groundwater depth must be in [0, {height}], got {value}")]
    GroundwaterDepth { value: f64, height: f64 },

    #[error("layer {layer}: `{name}` is required")]
    LayerAttribute { layer: usize, name: &'static str },

    #[error("layer index {index} is out of range (the profile has {n_layers} layers)")]
    LayerIndex { index: usize, n_layers: usize },

    #[error("depth {0} is outside the profile")]
    LocationDepth(f64),

    #[error("slice index {index} is out of range (the profile has {n_slices} slices)")]
    LocationIndex { index: isize, n_slices: usize },

    #[error("the soil profile must have at least one layer")]
    EmptyProfile,

    #[error("parameter `{0}` must be set before use")]
    MissingParameter(&'static str),

    #[error("parameter `{0}` is not defined for this model")]
    UnknownParameter(String),

    #[error("vertical effective stress must be > 0.0, got {0}")]
    NonPositiveStress(f64),

    #[error("invalid value for `{name}`: {value}")]
    InvalidSetting { name: &'static str, value: f64 },

    #[error("layer {layer}: soil model: {cause}")]
    LayerModel {
        layer: usize,
        cause: Box<ConfigurationError>,
    },
}

impl ConfigurationError {
    /// Attaches the 1-based index of the layer owning a soil model to a model error
    pub fn in_layer(layer: usize, err: Error) -> Error {
        match err {
            Error::Configuration(cause) => ConfigurationError::LayerModel {
                layer,
                cause: Box::new(cause),
            }
            .into(),
            other => other,
        }
    }
}

/// Holds a failure reported by a propagation engine
///
/// The message is kept exactly as given by the engine.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    /// Allocates a new instance
    pub fn new(message: impl Into<String>) -> Self {
        EngineError {
            message: message.into(),
        }
    }
}

/// Defines the errors returned by this crate
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("propagation engine failure: {0}")]
    Engine(#[from] EngineError),

    #[error("file error: {0}")]
    File(String),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
