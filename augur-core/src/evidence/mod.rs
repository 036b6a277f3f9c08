pub mod base;
pub mod evidence_type;
pub mod polarity;

pub use base::Evidence;
pub use evidence_type::{EvidenceType, TypeCaps};
pub use polarity::Polarity;
