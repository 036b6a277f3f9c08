//! ForecastCard assembly.
//!
//! Pure packaging of already-computed results plus the audit checklist.
//! Narrative text and drivers are opaque caller input.

use std::collections::HashSet;

use augur_core::models::{Audit, AuditChecklist, ForecastCard, InfluenceItem, NeutralPosterior};
use augur_core::{Evidence, TypeCaps};
use tracing::warn;

/// Everything the assembler packages into a card.
#[derive(Debug, Clone)]
pub struct CardInputs<'a> {
    pub question: String,
    pub p0: f64,
    pub posterior: NeutralPosterior,
    pub p_aware: Option<f64>,
    pub alpha: f64,
    pub drivers: Vec<String>,
    /// Source URLs; deduplicated during assembly.
    pub provenance: Vec<String>,
    pub markdown_report: String,
    /// The evidence the posterior was computed from, for the caps check.
    pub evidence: &'a [Evidence],
    pub caps: TypeCaps,
    pub base_rate_used: bool,
    pub trim_fraction: f64,
    pub influence_threshold: f64,
}

/// Assemble the terminal card.
pub fn assemble_card(inputs: CardInputs<'_>) -> ForecastCard {
    let CardInputs {
        question,
        p0,
        posterior,
        p_aware,
        alpha,
        drivers,
        provenance,
        markdown_report,
        evidence,
        caps,
        base_rate_used,
        trim_fraction,
        influence_threshold,
    } = inputs;

    let under_threshold = influence_under_threshold(&posterior.influence, influence_threshold);
    if !under_threshold {
        warn!(
            question = %question,
            max_delta_pp = posterior.max_delta_pp(),
            threshold = influence_threshold,
            "single evidence item swings the forecast past the influence threshold"
        );
    }

    let checklist = AuditChecklist {
        base_rate_used,
        caps_enforced: caps_enforced(&posterior.influence, evidence, &caps),
        correlation_discounted: posterior.clusters.iter().any(|c| c.size > 1 && c.rho > 0.0),
        trimmed_mean: trim_fraction > 0.0,
        influence_under_threshold: under_threshold,
        market_blended: p_aware.is_some(),
    };

    ForecastCard {
        question,
        p0,
        p_neutral: posterior.p_neutral,
        p_aware,
        alpha,
        drivers,
        evidence_influence: posterior.influence,
        clusters: posterior.clusters,
        audit: Audit { caps, checklist },
        provenance: dedup_provenance(provenance),
        markdown_report,
    }
}

/// `max(deltaPP) <= threshold`. Vacuously true with no evidence.
pub fn influence_under_threshold(influence: &[InfluenceItem], threshold: f64) -> bool {
    influence.iter().all(|i| i.delta_pp <= threshold)
}

/// Drop blank and repeated URLs, keeping first-seen order.
pub fn dedup_provenance<I>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    urls.into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty() && seen.insert(u.clone()))
        .collect()
}

/// Provenance gathered from the evidence itself, for callers that did not
/// collect their own.
pub fn collect_provenance(evidence: &[Evidence]) -> Vec<String> {
    dedup_provenance(evidence.iter().flat_map(|ev| ev.urls.iter().cloned()))
}

/// The `n` most influential items, largest swing first.
pub fn top_drivers(influence: &[InfluenceItem], n: usize) -> Vec<&InfluenceItem> {
    let mut ranked: Vec<&InfluenceItem> = influence.iter().collect();
    ranked.sort_by(|a, b| b.delta_pp.total_cmp(&a.delta_pp));
    ranked.truncate(n);
    ranked
}

/// Influence items are in evidence input order, so they pair up by position.
fn caps_enforced(influence: &[InfluenceItem], evidence: &[Evidence], caps: &TypeCaps) -> bool {
    influence
        .iter()
        .zip(evidence)
        .all(|(item, ev)| item.log_lr.abs() <= ev.cap(caps))
}
