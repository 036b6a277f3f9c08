//! # augur-core
//!
//! Foundation crate for the Augur forecasting engine.
//! Defines evidence records, derived models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod evidence;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AugurConfig;
pub use errors::{AugurError, AugurResult};
pub use evidence::{Evidence, EvidenceType, Polarity, TypeCaps};
pub use models::{
    Audit, AuditChecklist, ClusterSummary, ForecastCard, ForecastRequest, InfluenceItem,
    NeutralPosterior, PriorSource,
};
