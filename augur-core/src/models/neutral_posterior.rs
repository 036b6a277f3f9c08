use serde::{Deserialize, Serialize};

use super::{ClusterSummary, InfluenceItem};

/// Evidence-only posterior with its attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeutralPosterior {
    pub p_neutral: f64,
    /// Final log-odds before the sigmoid.
    pub log_odds: f64,
    /// One entry per evidence item, in input order.
    pub influence: Vec<InfluenceItem>,
    /// One entry per origin cluster, in first-appearance order.
    pub clusters: Vec<ClusterSummary>,
}

impl NeutralPosterior {
    /// Largest single-item swing, or 0 when there is no evidence.
    pub fn max_delta_pp(&self) -> f64 {
        self.influence
            .iter()
            .map(|i| i.delta_pp)
            .fold(0.0, f64::max)
    }
}
