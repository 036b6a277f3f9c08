use serde::{Deserialize, Serialize};

use super::defaults;
use crate::evidence::TypeCaps;

/// Evidence scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Maximum absolute logLR per evidence type.
    pub caps: TypeCaps,
    /// Weight of verifiability in the composite score.
    pub weight_verifiability: f64,
    /// Weight of corroboration-derived reliability.
    pub weight_reliability: f64,
    /// Weight of internal consistency.
    pub weight_consistency: f64,
    /// Weight of recency.
    pub weight_recency: f64,
    /// Rate constant in `r = 1 - e^(-k0 * corroborations)`.
    pub corroboration_k0: f64,
    /// Half-life (days) of the hyperbolic recency curve.
    pub recency_half_life_days: f64,
    /// Recency used when `publishedAt` is missing or unparseable.
    pub missing_recency: f64,
    /// Multiplier applied to first-report evidence.
    pub first_report_multiplier: f64,
    /// Clamp `logLRHint` overrides into the type cap.
    pub clamp_hints: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            caps: TypeCaps::default(),
            weight_verifiability: defaults::DEFAULT_WEIGHT_VERIFIABILITY,
            weight_reliability: defaults::DEFAULT_WEIGHT_RELIABILITY,
            weight_consistency: defaults::DEFAULT_WEIGHT_CONSISTENCY,
            weight_recency: defaults::DEFAULT_WEIGHT_RECENCY,
            corroboration_k0: defaults::DEFAULT_CORROBORATION_K0,
            recency_half_life_days: defaults::DEFAULT_RECENCY_HALF_LIFE_DAYS,
            missing_recency: defaults::DEFAULT_MISSING_RECENCY,
            first_report_multiplier: defaults::DEFAULT_FIRST_REPORT_MULTIPLIER,
            clamp_hints: defaults::DEFAULT_CLAMP_HINTS,
        }
    }
}
