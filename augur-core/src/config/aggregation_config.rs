use serde::{Deserialize, Serialize};

use super::defaults;

/// Posterior aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Fraction trimmed from each tail of a cluster's logLRs.
    pub trim_fraction: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            trim_fraction: defaults::DEFAULT_TRIM_FRACTION,
        }
    }
}
