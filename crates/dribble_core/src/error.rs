use thiserror::Error;

/// Startup-time configuration failures.
///
/// The scoring hot path never returns errors; everything that can go wrong
/// with tunables is caught here once, before the first planning tick.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("weight {field} must be non-negative, got {value}")]
    NegativeWeight { field: &'static str, value: f64 },

    #[error("score weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },

    #[error("sample_count must be at least 1")]
    ZeroSamples,

    #[error("failed to parse config: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Name of the offending parameter, if the error concerns a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::NonPositive { field, .. } => Some(*field),
            ConfigError::NonFinite { field, .. } => Some(*field),
            ConfigError::NegativeWeight { field, .. } => Some(*field),
            ConfigError::WeightSum { .. } => None,
            ConfigError::ZeroSamples => Some("sample_count"),
            ConfigError::Parse(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
