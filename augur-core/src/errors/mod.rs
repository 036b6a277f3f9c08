mod config_error;
mod scoring_error;

pub use config_error::ConfigError;
pub use scoring_error::ScoringError;

/// Top-level engine error.
///
/// The engine never substitutes a default for a value it could not compute;
/// every arithmetic failure surfaces here instead.
#[derive(Debug, thiserror::Error)]
pub enum AugurError {
    #[error("scoring error: {0}")]
    ScoringError(#[from] ScoringError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("invalid probability for {field}: {value}")]
    InvalidProbability { field: String, value: f64 },

    #[error("non-finite log-odds during {stage}: {value}")]
    NonFiniteLogOdds { stage: String, value: f64 },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type AugurResult<T> = Result<T, AugurError>;
