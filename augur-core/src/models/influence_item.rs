use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Leave-one-out influence of a single evidence item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InfluenceItem {
    pub evidence_id: String,
    pub cluster_id: String,
    /// The item's own logLR.
    #[serde(rename = "logLR")]
    pub log_lr: f64,
    /// `|p_neutral - p_without_this_item|`.
    #[serde(rename = "deltaPP")]
    pub delta_pp: f64,
}
