use augur_aggregation::math::trimmed_mean;
use augur_aggregation::{
    blend_market, effective_count, evidence_log_lr, prior_from_reference_class, ForecastEngine,
    ScoringContext,
};
use augur_core::config::defaults;
use augur_core::traits::IAggregator;
use augur_core::{Evidence, EvidenceType, Polarity};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

fn ctx() -> ScoringContext {
    ScoringContext::at(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
}

fn make_evidence(
    id: usize,
    origin: usize,
    evidence_type: EvidenceType,
    polarity: Polarity,
    verifiability: f64,
    consistency: f64,
    corroborations_indep: i64,
) -> Evidence {
    Evidence {
        id: format!("ev-{id}"),
        claim: String::new(),
        polarity,
        evidence_type,
        published_at: Some("2025-10-01".to_string()),
        urls: vec![],
        origin_id: format!("origin-{origin}"),
        first_report: false,
        verifiability,
        corroborations_indep,
        consistency,
        log_lr_hint: None,
    }
}

fn arb_type() -> impl Strategy<Value = EvidenceType> {
    prop_oneof![
        Just(EvidenceType::A),
        Just(EvidenceType::B),
        Just(EvidenceType::C),
        Just(EvidenceType::D),
    ]
}

fn arb_polarity() -> impl Strategy<Value = Polarity> {
    prop_oneof![Just(Polarity::Supports), Just(Polarity::Opposes)]
}

fn arb_evidence_list() -> impl Strategy<Value = Vec<Evidence>> {
    prop::collection::vec(
        (0usize..60, arb_type(), arb_polarity(), 0.0f64..=1.0, 0.0f64..=1.0, 0i64..20),
        0..80,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (origin, ty, pol, v, u, c))| make_evidence(i, origin, ty, pol, v, u, c))
            .collect()
    })
}

// ── Posterior bounds ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn posterior_stays_inside_unit_interval(
        p0 in 0.01f64..0.99,
        evidence in arb_evidence_list(),
    ) {
        let engine = ForecastEngine::default();
        let post = engine.aggregate_with_context(p0, &evidence, None, &ctx()).unwrap();
        prop_assert!(post.p_neutral > 0.0 && post.p_neutral < 1.0);
        prop_assert_eq!(post.influence.len(), evidence.len());
        for item in &post.influence {
            prop_assert!(item.delta_pp >= 0.0 && item.delta_pp < 1.0);
        }
    }

    #[test]
    fn empty_evidence_returns_prior(p0 in 0.0f64..=1.0) {
        let post = ForecastEngine::default().aggregate(p0, &[], None).unwrap();
        prop_assert_eq!(post.p_neutral, p0);
    }
}

// ── Scoring ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn log_lr_respects_type_cap(
        ty in arb_type(),
        pol in arb_polarity(),
        v in -5.0f64..5.0,
        u in -5.0f64..5.0,
        c in -10i64..10_000,
    ) {
        let ev = make_evidence(0, 0, ty, pol, v, u, c);
        let log_lr = evidence_log_lr(&ev, &ctx()).unwrap();
        let cap = ev.cap(&Default::default());
        prop_assert!(log_lr.abs() <= cap);
        prop_assert_eq!(log_lr.signum(), pol.sign());
    }

    #[test]
    fn corroboration_is_monotone(
        ty in arb_type(),
        v in 0.0f64..1.0,
        u in 0.0f64..1.0,
        c in 0i64..20,
    ) {
        let lo = evidence_log_lr(&make_evidence(0, 0, ty, Polarity::Supports, v, u, c), &ctx()).unwrap();
        let hi = evidence_log_lr(&make_evidence(0, 0, ty, Polarity::Supports, v, u, c + 1), &ctx()).unwrap();
        prop_assert!(hi > lo, "corroborations {} -> {}: {} !> {}", c, c + 1, hi, lo);
    }
}

// ── Correlation discount ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn effective_count_monotone_in_rho(m in 1usize..50, a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(effective_count(m, hi) <= effective_count(m, lo) + 1e-12);
        prop_assert_eq!(effective_count(m, 0.0), m as f64);
    }

    #[test]
    fn trimmed_mean_stays_within_range(values in prop::collection::vec(-5.0f64..5.0, 1..30), trim in 0.0f64..0.5) {
        let mean = trimmed_mean(&values, trim);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(mean >= min - 1e-12 && mean <= max + 1e-12);
    }
}

// ── Prior and blending ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn prior_strictly_inside_unit_interval(trials in -5i64..500, successes in -5i64..600) {
        let p = prior_from_reference_class(trials, successes, defaults::DEFAULT_WILSON_Z);
        prop_assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn self_blend_is_identity(p in 0.001f64..0.999, alpha in 0.0f64..=1.0) {
        let blended = blend_market(p, p, alpha).unwrap();
        prop_assert!((blended - p).abs() < 1e-9);
    }

    #[test]
    fn zero_alpha_is_identity(p in 0.0f64..=1.0, m in 0.0f64..=1.0) {
        prop_assert_eq!(blend_market(p, m, 0.0).unwrap(), p);
    }

    #[test]
    fn blend_lies_between_inputs(p in 0.01f64..0.99, m in 0.01f64..0.99, alpha in 0.0f64..=1.0) {
        let blended = blend_market(p, m, alpha).unwrap();
        let (lo, hi) = if p <= m { (p, m) } else { (m, p) };
        prop_assert!(blended >= lo - 1e-9 && blended <= hi + 1e-9);
    }
}
