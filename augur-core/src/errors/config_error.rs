/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    #[error("config value {field} out of range: {value}")]
    OutOfRange { field: String, value: f64 },
}
