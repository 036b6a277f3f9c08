//! Evidence-only posterior.
//!
//! ```text
//! l = logit(p0)
//!   + Σ_clusters mEff(cluster) × trimmedMean(logLR of members)
//! pNeutral = clampProbability(sigmoid(l))
//! ```

pub mod influence;

use std::collections::HashMap;

use augur_core::config::{defaults, AugurConfig};
use augur_core::errors::{AugurError, AugurResult};
use augur_core::models::{ClusterSummary, NeutralPosterior};
use augur_core::traits::IEvidenceScorer;
use augur_core::Evidence;
use tracing::debug;

use crate::clustering::{self, OriginCluster};
use crate::math::{clamp_probability, logit, sigmoid, trimmed_mean_sorted};

/// Tuning for one aggregation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationParams {
    /// Fraction of each cluster's logLRs trimmed from each tail.
    pub trim_fraction: f64,
    /// Correlation assumed for multi-item clusters without an override.
    pub default_rho: f64,
}

impl Default for AggregationParams {
    fn default() -> Self {
        Self {
            trim_fraction: defaults::DEFAULT_TRIM_FRACTION,
            default_rho: defaults::DEFAULT_RHO,
        }
    }
}

impl From<&AugurConfig> for AggregationParams {
    fn from(config: &AugurConfig) -> Self {
        Self {
            trim_fraction: config.aggregation.trim_fraction,
            default_rho: config.clustering.default_rho,
        }
    }
}

/// A cluster after scoring: its members' logLRs sorted ascending, and the
/// log-odds it contributes.
#[derive(Debug, Clone)]
pub(crate) struct ScoredCluster {
    pub cluster: OriginCluster,
    pub sorted_log_lrs: Vec<f64>,
    pub contribution: f64,
}

/// Combine `evidence` into a posterior starting from `p0` and attribute the
/// result to each item by leave-one-out recomputation.
///
/// An empty evidence list returns `p0` unchanged. Any non-finite value met
/// along the way is an error; nothing is replaced by a default.
pub fn aggregate_neutral(
    p0: f64,
    evidence: &[Evidence],
    rho_overrides: Option<&HashMap<String, f64>>,
    params: &AggregationParams,
    scorer: &dyn IEvidenceScorer,
) -> AugurResult<NeutralPosterior> {
    if !p0.is_finite() || !(0.0..=1.0).contains(&p0) {
        return Err(AugurError::InvalidProbability {
            field: "p0".to_string(),
            value: p0,
        });
    }

    let prior_log_odds = logit(clamp_probability(p0));

    if evidence.is_empty() {
        return Ok(NeutralPosterior {
            p_neutral: p0,
            log_odds: prior_log_odds,
            influence: Vec::new(),
            clusters: Vec::new(),
        });
    }

    let log_lrs = evidence
        .iter()
        .map(|ev| scorer.log_lr(ev))
        .collect::<AugurResult<Vec<f64>>>()?;

    let clusters = clustering::cluster_evidence(evidence, rho_overrides, params.default_rho);

    let mut log_odds = prior_log_odds;
    let mut scored = Vec::with_capacity(clusters.len());
    let mut summaries = Vec::with_capacity(clusters.len());

    for cluster in clusters {
        let mut sorted: Vec<f64> = cluster.members.iter().map(|&i| log_lrs[i]).collect();
        sorted.sort_by(f64::total_cmp);

        let mean = trimmed_mean_sorted(&sorted, params.trim_fraction);
        let m_eff = cluster.effective_count();
        let contribution = m_eff * mean;
        ensure_finite("cluster contribution", contribution)?;

        debug!(
            cluster_id = %cluster.id,
            size = cluster.size(),
            rho = cluster.rho,
            m_eff,
            contribution,
            "cluster scored"
        );

        log_odds += contribution;
        summaries.push(ClusterSummary {
            cluster_id: cluster.id.clone(),
            size: cluster.size(),
            rho: cluster.rho,
            m_eff,
            mean_log_lr: mean,
            contribution,
            member_ids: cluster.members.iter().map(|&i| evidence[i].id.clone()).collect(),
        });
        scored.push(ScoredCluster {
            cluster,
            sorted_log_lrs: sorted,
            contribution,
        });
    }

    ensure_finite("posterior", log_odds)?;
    // Past |l| ~ 37 the sigmoid rounds to exactly 0 or 1.
    let p_neutral = clamp_probability(sigmoid(log_odds));

    let influence = influence::leave_one_out(
        evidence,
        &log_lrs,
        &scored,
        log_odds,
        p_neutral,
        rho_overrides,
        params,
    )?;

    Ok(NeutralPosterior {
        p_neutral,
        log_odds,
        influence,
        clusters: summaries,
    })
}

pub(crate) fn ensure_finite(stage: &str, value: f64) -> AugurResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AugurError::NonFiniteLogOdds {
            stage: stage.to_string(),
            value,
        })
    }
}
