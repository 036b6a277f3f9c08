pub mod cluster_summary;
pub mod forecast_card;
pub mod forecast_request;
pub mod influence_item;
pub mod neutral_posterior;

pub use cluster_summary::ClusterSummary;
pub use forecast_card::{Audit, AuditChecklist, ForecastCard};
pub use forecast_request::{ForecastRequest, PriorSource};
pub use influence_item::InfluenceItem;
pub use neutral_posterior::NeutralPosterior;
