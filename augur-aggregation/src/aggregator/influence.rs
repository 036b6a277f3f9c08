//! Leave-one-out influence.
//!
//! For each item: drop it from its cluster, recompute that cluster's
//! correlation, effective count and trimmed mean over the remaining members,
//! swap the cluster's contribution for the counterfactual one, and report
//! `|pNeutral - sigmoid(l_counterfactual)|`, with both probabilities kept
//! inside the same open interval as the posterior. Every other cluster is held fixed.

use std::collections::HashMap;

use augur_core::errors::AugurResult;
use augur_core::models::InfluenceItem;
use augur_core::Evidence;

use super::{ensure_finite, AggregationParams, ScoredCluster};
use crate::clustering::{cluster_rho, effective_count};
use crate::math::{clamp_probability, sigmoid, trimmed_mean_sorted};

/// Influence items in evidence input order.
pub(crate) fn leave_one_out(
    evidence: &[Evidence],
    log_lrs: &[f64],
    clusters: &[ScoredCluster],
    log_odds: f64,
    p_neutral: f64,
    rho_overrides: Option<&HashMap<String, f64>>,
    params: &AggregationParams,
) -> AugurResult<Vec<InfluenceItem>> {
    let mut slots: Vec<Option<InfluenceItem>> = vec![None; evidence.len()];

    for scored in clusters {
        let cluster = &scored.cluster;
        let remaining = cluster.size() - 1;
        let override_rho = rho_overrides.and_then(|m| m.get(&cluster.id).copied());
        let rho = cluster_rho(remaining, override_rho, params.default_rho);
        let m_eff = effective_count(remaining, rho);

        for &i in &cluster.members {
            let counterfactual = if remaining == 0 {
                0.0
            } else {
                let rest = without_one(&scored.sorted_log_lrs, log_lrs[i]);
                m_eff * trimmed_mean_sorted(&rest, params.trim_fraction)
            };

            let cf_log_odds = log_odds - scored.contribution + counterfactual;
            ensure_finite("leave-one-out", cf_log_odds)?;

            slots[i] = Some(InfluenceItem {
                evidence_id: evidence[i].id.clone(),
                cluster_id: cluster.id.clone(),
                log_lr: log_lrs[i],
                delta_pp: (p_neutral - clamp_probability(sigmoid(cf_log_odds))).abs(),
            });
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Copy of a sorted slice with one occurrence of `value` removed. Equal
/// values are interchangeable, so the result is still sorted and exact.
fn without_one(sorted: &[f64], value: f64) -> Vec<f64> {
    let mut rest = sorted.to_vec();
    if let Some(pos) = rest.iter().position(|v| v.total_cmp(&value).is_eq()) {
        rest.remove(pos);
    }
    rest
}
