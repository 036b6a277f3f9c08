use augur_core::config::ScoringConfig;
use augur_core::errors::{AugurResult, ScoringError};
use augur_core::Evidence;
use serde::Serialize;
use tracing::warn;

use super::factors;
use super::ScoringContext;
use crate::math::clamp;

/// Weighted composite evidence score.
///
/// ```text
/// score = 0.45 × verifiability
///       + 0.25 × reliability      (1 - e^(-k0 × corroborations))
///       + 0.15 × consistency
///       + 0.15 × recency          (1 / (1 + days / 120))
///
/// logLR = clamp(polarity × cap × score × firstReport, -cap, +cap)
/// ```
///
/// A `logLRHint` bypasses the composite entirely.
pub fn compute(
    evidence: &Evidence,
    config: &ScoringConfig,
    ctx: &ScoringContext,
) -> AugurResult<f64> {
    compute_breakdown(evidence, config, ctx).map(|b| b.log_lr)
}

/// Individual factor values behind a formula-scored logLR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorScores {
    pub verifiability: f64,
    pub reliability: f64,
    pub consistency: f64,
    pub recency: f64,
    pub composite: f64,
    pub first_report: f64,
}

/// Full scoring trace for one evidence item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub evidence_id: String,
    pub cap: f64,
    /// `None` when a hint supplied the logLR.
    pub factors: Option<FactorScores>,
    /// The raw hint, if one was supplied.
    pub hint: Option<f64>,
    pub log_lr: f64,
}

/// Score an item and keep every intermediate value.
pub fn compute_breakdown(
    evidence: &Evidence,
    config: &ScoringConfig,
    ctx: &ScoringContext,
) -> AugurResult<ScoreBreakdown> {
    let cap = evidence.cap(&config.caps);

    if let Some(hint) = evidence.log_lr_hint {
        return score_hint(evidence, hint, cap, config.clamp_hints);
    }

    let verifiability = bounded_input(evidence, "verifiability", evidence.verifiability)?;
    let consistency = bounded_input(evidence, "consistency", evidence.consistency)?;
    let reliability =
        factors::reliability::calculate(evidence.corroborations_indep, config.corroboration_k0);
    let recency = factors::recency::calculate(
        evidence.published_at.as_deref(),
        ctx.now,
        config.recency_half_life_days,
        config.missing_recency,
    );
    let first_report =
        factors::first_report::multiplier(evidence.first_report, config.first_report_multiplier);

    let composite = verifiability * config.weight_verifiability
        + reliability * config.weight_reliability
        + consistency * config.weight_consistency
        + recency * config.weight_recency;

    let raw = evidence.polarity.sign() * cap * composite * first_report;
    let log_lr = clamp(raw, -cap, cap);

    if !log_lr.is_finite() {
        return Err(ScoringError::NonFiniteScore {
            evidence_id: evidence.id.clone(),
            value: log_lr,
        }
        .into());
    }

    Ok(ScoreBreakdown {
        evidence_id: evidence.id.clone(),
        cap,
        factors: Some(FactorScores {
            verifiability,
            reliability,
            consistency,
            recency,
            composite,
            first_report,
        }),
        hint: None,
        log_lr,
    })
}

fn score_hint(
    evidence: &Evidence,
    hint: f64,
    cap: f64,
    clamp_hints: bool,
) -> AugurResult<ScoreBreakdown> {
    if !hint.is_finite() {
        return Err(ScoringError::NonFiniteHint {
            evidence_id: evidence.id.clone(),
            value: hint,
        }
        .into());
    }

    let log_lr = if clamp_hints { clamp(hint, -cap, cap) } else { hint };
    if log_lr != hint {
        warn!(
            evidence_id = %evidence.id,
            hint,
            cap,
            "logLR hint outside type cap, clamped"
        );
    }

    Ok(ScoreBreakdown {
        evidence_id: evidence.id.clone(),
        cap,
        factors: None,
        hint: Some(hint),
        log_lr,
    })
}

/// Clamp a best-effort [0, 1] input. NaN and infinities are upstream bugs
/// that clamping would hide, so they are errors.
fn bounded_input(evidence: &Evidence, field: &str, value: f64) -> AugurResult<f64> {
    if !value.is_finite() {
        return Err(ScoringError::NonFiniteInput {
            evidence_id: evidence.id.clone(),
            field: field.to_string(),
            value,
        }
        .into());
    }
    Ok(clamp(value, 0.0, 1.0))
}
