use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ClusterSummary, InfluenceItem};
use crate::errors::AugurResult;
use crate::evidence::TypeCaps;

/// Boolean robustness checklist attached to every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AuditChecklist {
    /// p0 came from a reference-class base rate.
    pub base_rate_used: bool,
    /// Every evidence logLR lies within its type cap.
    pub caps_enforced: bool,
    /// At least one cluster was discounted for correlation.
    pub correlation_discounted: bool,
    /// Cluster means were trimmed.
    pub trimmed_mean: bool,
    /// No single item moved the forecast past the influence threshold.
    pub influence_under_threshold: bool,
    /// A market probability was blended in.
    pub market_blended: bool,
}

/// Audit section: the caps table in force plus the checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Audit {
    pub caps: TypeCaps,
    pub checklist: AuditChecklist,
}

/// Terminal output of one forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ForecastCard {
    pub question: String,
    pub p0: f64,
    pub p_neutral: f64,
    pub p_aware: Option<f64>,
    pub alpha: f64,
    pub drivers: Vec<String>,
    pub evidence_influence: Vec<InfluenceItem>,
    pub clusters: Vec<ClusterSummary>,
    pub audit: Audit,
    pub provenance: Vec<String>,
    pub markdown_report: String,
}

impl ForecastCard {
    /// The headline probability: market-aware when available, else neutral.
    pub fn headline(&self) -> f64 {
        self.p_aware.unwrap_or(self.p_neutral)
    }

    /// Serialize to pretty JSON for the client payload.
    pub fn to_json(&self) -> AugurResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
