use std::collections::HashMap;

use crate::errors::AugurResult;
use crate::evidence::Evidence;
use crate::models::NeutralPosterior;

/// Evidence-only posterior computation with leave-one-out influence.
pub trait IAggregator: Send + Sync {
    /// Combine `evidence` into a posterior starting from `p0`.
    fn aggregate(
        &self,
        p0: f64,
        evidence: &[Evidence],
        rho_overrides: Option<&HashMap<String, f64>>,
    ) -> AugurResult<NeutralPosterior>;
}
