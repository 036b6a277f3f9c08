use augur_core::errors::*;

#[test]
fn invalid_probability_carries_field_and_value() {
    let err = AugurError::InvalidProbability {
        field: "market_prob".into(),
        value: 1.5,
    };
    let msg = err.to_string();
    assert!(msg.contains("market_prob"));
    assert!(msg.contains("1.5"));
}

#[test]
fn non_finite_log_odds_carries_stage() {
    let err = AugurError::NonFiniteLogOdds {
        stage: "posterior".into(),
        value: f64::INFINITY,
    };
    let msg = err.to_string();
    assert!(msg.contains("posterior"));
    assert!(msg.contains("inf"));
}

#[test]
fn scoring_error_converts_and_keeps_evidence_id() {
    let err: AugurError = ScoringError::NonFiniteInput {
        evidence_id: "ev-9".into(),
        field: "consistency".into(),
        value: f64::NAN,
    }
    .into();
    assert!(matches!(err, AugurError::ScoringError(_)));
    let msg = err.to_string();
    assert!(msg.contains("ev-9"));
    assert!(msg.contains("consistency"));
    assert!(msg.contains("NaN"));
}

#[test]
fn hint_error_message() {
    let err = ScoringError::NonFiniteHint {
        evidence_id: "h1".into(),
        value: f64::NEG_INFINITY,
    };
    assert!(err.to_string().contains("h1"));
}

#[test]
fn config_error_converts() {
    let err: AugurError = ConfigError::OutOfRange {
        field: "prior.z".into(),
        value: 0.0,
    }
    .into();
    assert!(matches!(err, AugurError::ConfigError(ConfigError::OutOfRange { .. })));
    assert!(err.to_string().contains("prior.z"));
}

#[test]
fn serde_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: AugurError = json_err.into();
    assert!(matches!(err, AugurError::SerializationError(_)));
}

#[test]
fn result_alias_propagates_with_question_mark() {
    fn inner() -> AugurResult<()> {
        let scored: Result<f64, ScoringError> = Err(ScoringError::NonFiniteScore {
            evidence_id: "x".into(),
            value: f64::NAN,
        });
        scored?;
        Ok(())
    }
    assert!(inner().is_err());
}
