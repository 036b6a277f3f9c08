pub mod first_report;
pub mod recency;
pub mod reliability;
