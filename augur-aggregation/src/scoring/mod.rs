pub mod factors;
pub mod formula;

use augur_core::config::ScoringConfig;
use augur_core::errors::AugurResult;
use augur_core::traits::IEvidenceScorer;
use augur_core::Evidence;
use chrono::{DateTime, Utc};

pub use formula::{FactorScores, ScoreBreakdown};

/// Context needed to score evidence. Carrying `now` explicitly keeps scoring
/// a deterministic function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    /// Reference time for recency.
    pub now: DateTime<Utc>,
}

impl ScoringContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Default for ScoringContext {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}

/// Evidence scorer backed by a [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct EvidenceScorer {
    config: ScoringConfig,
    ctx: ScoringContext,
}

impl EvidenceScorer {
    pub fn new(config: ScoringConfig, ctx: ScoringContext) -> Self {
        Self { config, ctx }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score with a full factor breakdown.
    pub fn breakdown(&self, evidence: &Evidence) -> AugurResult<ScoreBreakdown> {
        formula::compute_breakdown(evidence, &self.config, &self.ctx)
    }
}

impl IEvidenceScorer for EvidenceScorer {
    fn log_lr(&self, evidence: &Evidence) -> AugurResult<f64> {
        formula::compute(evidence, &self.config, &self.ctx)
    }

    fn cap(&self, evidence: &Evidence) -> f64 {
        evidence.cap(&self.config.caps)
    }
}

/// Score one item with the default scoring config.
pub fn evidence_log_lr(evidence: &Evidence, ctx: &ScoringContext) -> AugurResult<f64> {
    formula::compute(evidence, &ScoringConfig::default(), ctx)
}
