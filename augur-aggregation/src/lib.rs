//! # augur-aggregation
//!
//! Correlation-aware log-odds aggregation of evidence into a probability.
//! Evidence is scored into bounded logLRs, grouped by origin, discounted for
//! intra-origin correlation, combined with trimmed means, and attributed back
//! to each item by exact leave-one-out recomputation.

pub mod aggregator;
pub mod blending;
pub mod clustering;
pub mod engine;
pub mod math;
pub mod prior;
pub mod report;
pub mod scoring;

pub use aggregator::{aggregate_neutral, AggregationParams};
pub use blending::{blend_market, blend_market_with, effective_alpha};
pub use clustering::{cluster_evidence, effective_count, OriginCluster};
pub use engine::ForecastEngine;
pub use prior::{prior_from_reference_class, wilson_interval};
pub use report::{assemble_card, CardInputs};
pub use scoring::{evidence_log_lr, EvidenceScorer, ScoreBreakdown, ScoringContext};
