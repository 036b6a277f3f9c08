use serde::{Deserialize, Serialize};

use super::defaults;

/// Base-rate prior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorConfig {
    /// Normal quantile for the Wilson score interval.
    pub z: f64,
    /// Prior used when a request carries no prior source.
    pub default_prior: f64,
}

impl Default for PriorConfig {
    fn default() -> Self {
        Self {
            z: defaults::DEFAULT_WILSON_Z,
            default_prior: defaults::DEFAULT_PRIOR,
        }
    }
}
