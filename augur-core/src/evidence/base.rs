use serde::{Deserialize, Serialize};

use super::{EvidenceType, Polarity, TypeCaps};

/// One structured piece of evidence about a yes/no proposition.
///
/// Produced upstream by research and claim extraction; the engine treats it
/// as immutable input. Numeric fields are best-effort and get clamped into
/// range at scoring time rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub id: String,
    /// Free-text description, carried through for reporting only.
    #[serde(default)]
    pub claim: String,
    pub polarity: Polarity,
    #[serde(rename = "type")]
    pub evidence_type: EvidenceType,
    /// ISO timestamp. Missing or unparseable values score neutral recency.
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    /// Items sharing an origin are treated as correlated reports.
    #[serde(default)]
    pub origin_id: String,
    #[serde(default)]
    pub first_report: bool,
    /// Confidence the claim is accurately reported, in [0, 1].
    pub verifiability: f64,
    #[serde(default)]
    pub corroborations_indep: i64,
    /// Internal and logical consistency, in [0, 1].
    pub consistency: f64,
    /// Precomputed logLR that bypasses the scoring formula.
    #[serde(default, rename = "logLRHint")]
    pub log_lr_hint: Option<f64>,
}

impl Evidence {
    /// Cluster key for this item. A blank origin makes the item its own origin.
    ///
    /// Ids and origin ids share one key space: a blank-origin item whose id
    /// equals another item's `origin_id` lands in that item's cluster, and a
    /// `rho_overrides` entry keyed by that string applies to both.
    pub fn origin_key(&self) -> &str {
        if self.origin_id.trim().is_empty() {
            &self.id
        } else {
            &self.origin_id
        }
    }

    /// Maximum absolute logLR this item may contribute.
    pub fn cap(&self, caps: &TypeCaps) -> f64 {
        caps.cap(self.evidence_type)
    }
}
