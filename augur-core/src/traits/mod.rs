mod aggregator;
mod evidence_scorer;

pub use aggregator::IAggregator;
pub use evidence_scorer::IEvidenceScorer;
