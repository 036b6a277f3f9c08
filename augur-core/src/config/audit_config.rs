use serde::{Deserialize, Serialize};

use super::defaults;

/// Report-card audit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Largest single-evidence swing (in probability) still considered robust.
    pub influence_threshold: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            influence_threshold: defaults::DEFAULT_INFLUENCE_THRESHOLD,
        }
    }
}
