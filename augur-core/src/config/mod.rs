pub mod aggregation_config;
pub mod audit_config;
pub mod blending_config;
pub mod clustering_config;
pub mod defaults;
pub mod prior_config;
pub mod scoring_config;

pub use aggregation_config::AggregationConfig;
pub use audit_config::AuditConfig;
pub use blending_config::{BlendMode, BlendingConfig};
pub use clustering_config::ClusteringConfig;
pub use prior_config::PriorConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AugurResult, ConfigError};

/// Top-level engine configuration. Every section falls back to its defaults,
/// so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AugurConfig {
    pub scoring: ScoringConfig,
    pub clustering: ClusteringConfig,
    pub aggregation: AggregationConfig,
    pub prior: PriorConfig,
    pub blending: BlendingConfig,
    pub audit: AuditConfig,
}

impl AugurConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> AugurResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values outside the ranges the engine's math is defined on.
    pub fn validate(&self) -> AugurResult<()> {
        let s = &self.scoring;
        for (field, cap) in [
            ("scoring.caps.A", s.caps.a),
            ("scoring.caps.B", s.caps.b),
            ("scoring.caps.C", s.caps.c),
            ("scoring.caps.D", s.caps.d),
        ] {
            check(field, cap, |v| v > 0.0)?;
        }
        for (field, weight) in [
            ("scoring.weight_verifiability", s.weight_verifiability),
            ("scoring.weight_reliability", s.weight_reliability),
            ("scoring.weight_consistency", s.weight_consistency),
            ("scoring.weight_recency", s.weight_recency),
        ] {
            check(field, weight, |v| v >= 0.0)?;
        }
        check("scoring.corroboration_k0", s.corroboration_k0, |v| v > 0.0)?;
        check("scoring.recency_half_life_days", s.recency_half_life_days, |v| v > 0.0)?;
        check("scoring.missing_recency", s.missing_recency, unit)?;
        check("scoring.first_report_multiplier", s.first_report_multiplier, |v| v >= 0.0)?;

        check("clustering.default_rho", self.clustering.default_rho, unit)?;

        check("aggregation.trim_fraction", self.aggregation.trim_fraction, |v| {
            (0.0..0.5).contains(&v)
        })?;

        check("prior.z", self.prior.z, |v| v > 0.0)?;
        check("prior.default_prior", self.prior.default_prior, |v| v > 0.0 && v < 1.0)?;

        check("blending.alpha", self.blending.alpha, unit)?;
        check("audit.influence_threshold", self.audit.influence_threshold, unit)?;
        Ok(())
    }
}

fn unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

fn check(field: &str, value: f64, ok: impl Fn(f64) -> bool) -> AugurResult<()> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value,
        }
        .into())
    }
}
