use serde::{Deserialize, Serialize};

use super::defaults;

/// Origin clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Intra-cluster correlation assumed for multi-item clusters.
    pub default_rho: f64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            default_rho: defaults::DEFAULT_RHO,
        }
    }
}
