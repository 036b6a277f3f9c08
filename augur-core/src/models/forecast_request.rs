use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::evidence::Evidence;

/// Where a forecast's starting probability comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriorSource {
    /// The configured default prior.
    #[default]
    Default,
    /// A caller-supplied prior.
    Fixed { p0: f64 },
    /// Base rate from a reference class of past trials.
    ReferenceClass { trials: i64, successes: i64 },
}

/// Everything one forecast needs. Collaborators build this; the engine
/// consumes it without mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastRequest {
    pub question: String,
    pub prior: PriorSource,
    pub evidence: Vec<Evidence>,
    /// Market-implied probability, e.g. an order-book midpoint.
    pub market_prob: Option<f64>,
    /// Overrides the configured blending weight for this request.
    pub alpha: Option<f64>,
    /// Per-cluster correlation overrides keyed by cluster id.
    pub rho_overrides: HashMap<String, f64>,
    pub drivers: Vec<String>,
    /// Source URLs collected by the caller. When empty, evidence URLs are used.
    pub provenance: Vec<String>,
    pub markdown_report: String,
}
