use crate::errors::AugurResult;
use crate::evidence::Evidence;

/// Maps one evidence item to a signed log-likelihood ratio.
pub trait IEvidenceScorer: Send + Sync {
    /// Signed logLR. Within `[-cap, +cap]` for the item's type unless the
    /// implementation trusts unclamped hints.
    fn log_lr(&self, evidence: &Evidence) -> AugurResult<f64>;

    /// Maximum absolute logLR for this item.
    fn cap(&self, evidence: &Evidence) -> f64;
}
