//! ForecastEngine: implements IAggregator, orchestrates the full pipeline.
//!
//! prior → score + cluster + aggregate → leave-one-out → blend → card

use std::collections::HashMap;

use augur_core::config::AugurConfig;
use augur_core::errors::AugurResult;
use augur_core::models::{ForecastCard, ForecastRequest, NeutralPosterior, PriorSource};
use augur_core::traits::IAggregator;
use augur_core::Evidence;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::aggregator::{self, AggregationParams};
use crate::blending;
use crate::prior;
use crate::report::{self, CardInputs};
use crate::scoring::{EvidenceScorer, ScoringContext};

/// Stateless forecasting engine. Holds only its configuration, so one
/// instance can serve any number of concurrent forecasts.
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    config: AugurConfig,
}

impl ForecastEngine {
    pub fn new(config: AugurConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AugurConfig {
        &self.config
    }

    /// Resolve a prior source to `(p0, from_base_rate)`.
    pub fn resolve_prior(&self, source: &PriorSource) -> (f64, bool) {
        match *source {
            PriorSource::Default => (self.config.prior.default_prior, false),
            PriorSource::Fixed { p0 } => (p0, false),
            PriorSource::ReferenceClass { trials, successes } => (
                prior::prior_from_reference_class(trials, successes, self.config.prior.z),
                true,
            ),
        }
    }

    /// Evidence-only posterior scored against an explicit reference time.
    pub fn aggregate_with_context(
        &self,
        p0: f64,
        evidence: &[Evidence],
        rho_overrides: Option<&HashMap<String, f64>>,
        ctx: &ScoringContext,
    ) -> AugurResult<NeutralPosterior> {
        let scorer = EvidenceScorer::new(self.config.scoring.clone(), *ctx);
        let params = AggregationParams::from(&self.config);
        aggregator::aggregate_neutral(p0, evidence, rho_overrides, &params, &scorer)
    }

    /// Run one forecast end to end.
    pub fn forecast(
        &self,
        request: &ForecastRequest,
        ctx: &ScoringContext,
    ) -> AugurResult<ForecastCard> {
        let (p0, base_rate_used) = self.resolve_prior(&request.prior);
        debug!(p0, base_rate_used, question = %request.question, "resolved prior");

        let overrides = (!request.rho_overrides.is_empty()).then_some(&request.rho_overrides);
        let posterior = self.aggregate_with_context(p0, &request.evidence, overrides, ctx)?;

        // The card reports the weight actually applied, not the raw request value.
        let alpha =
            blending::effective_alpha(request.alpha.unwrap_or(self.config.blending.alpha))?;
        let p_aware = request
            .market_prob
            .map(|m| {
                blending::blend_market_with(posterior.p_neutral, m, alpha, self.config.blending.mode)
            })
            .transpose()?;

        info!(
            question = %request.question,
            evidence = request.evidence.len(),
            clusters = posterior.clusters.len(),
            p0,
            p_neutral = posterior.p_neutral,
            p_aware = ?p_aware,
            "forecast complete"
        );

        let provenance = if request.provenance.is_empty() {
            report::collect_provenance(&request.evidence)
        } else {
            request.provenance.clone()
        };

        Ok(report::assemble_card(CardInputs {
            question: request.question.clone(),
            p0,
            posterior,
            p_aware,
            alpha,
            drivers: request.drivers.clone(),
            provenance,
            markdown_report: request.markdown_report.clone(),
            evidence: &request.evidence,
            caps: self.config.scoring.caps,
            base_rate_used,
            trim_fraction: self.config.aggregation.trim_fraction,
            influence_threshold: self.config.audit.influence_threshold,
        }))
    }

    /// Forecast independent requests in parallel. Results keep request order.
    pub fn forecast_batch(
        &self,
        requests: &[ForecastRequest],
        ctx: &ScoringContext,
    ) -> Vec<AugurResult<ForecastCard>> {
        info!(batch = requests.len(), "forecasting batch");
        requests
            .par_iter()
            .map(|request| self.forecast(request, ctx))
            .collect()
    }
}

impl IAggregator for ForecastEngine {
    fn aggregate(
        &self,
        p0: f64,
        evidence: &[Evidence],
        rho_overrides: Option<&HashMap<String, f64>>,
    ) -> AugurResult<NeutralPosterior> {
        // Recency is measured against the current time.
        self.aggregate_with_context(p0, evidence, rho_overrides, &ScoringContext::default())
    }
}
