use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Metadata for one origin cluster, recorded during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub cluster_id: String,
    /// Raw member count `m`.
    pub size: usize,
    /// Intra-cluster correlation used for this cluster.
    pub rho: f64,
    /// Effective count `m / (1 + (m - 1) * rho)`.
    #[serde(rename = "mEff")]
    pub m_eff: f64,
    /// Trimmed-mean logLR of the members.
    #[serde(rename = "meanLogLR")]
    pub mean_log_lr: f64,
    /// Log-odds added to the posterior: `m_eff * mean_log_lr`.
    pub contribution: f64,
    /// Evidence ids in input order.
    pub member_ids: Vec<String>,
}
