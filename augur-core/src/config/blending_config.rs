use serde::{Deserialize, Serialize};

use super::defaults;

/// How the market probability enters the neutral posterior's log-odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// `(1 - alpha) * logit(p) + alpha * logit(m)`. Blending a probability
    /// with itself is a no-op.
    #[default]
    Pooled,
    /// `logit(p) + alpha * logit(m)`. The market nudges the evidence odds.
    Additive,
}

/// Market blending configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendingConfig {
    /// Weight given to the market-implied log-odds.
    pub alpha: f64,
    pub mode: BlendMode,
}

impl Default for BlendingConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_ALPHA,
            mode: BlendMode::default(),
        }
    }
}
