/// Evidence scoring errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("evidence {evidence_id} has a non-finite logLR hint: {value}")]
    NonFiniteHint { evidence_id: String, value: f64 },

    #[error("evidence {evidence_id} has a non-finite {field}: {value}")]
    NonFiniteInput {
        evidence_id: String,
        field: String,
        value: f64,
    },

    #[error("evidence {evidence_id} scored a non-finite logLR: {value}")]
    NonFiniteScore { evidence_id: String, value: f64 },
}
