use augur_core::{Evidence, EvidenceType, Polarity, TypeCaps};
use proptest::prelude::*;

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

/// Short decimals survive a JSON trip exactly.
fn arb_unit() -> impl Strategy<Value = f64> {
    (0u32..=1000).prop_map(|n| n as f64 / 1000.0)
}

fn arb_evidence() -> impl Strategy<Value = Evidence> {
    (
        "[a-z0-9]{1,8}",
        "[ a-z]{0,6}",
        arb_type(),
        arb_polarity(),
        arb_unit(),
        arb_unit(),
        -3i64..30,
        prop::option::of((-400i32..=400).prop_map(|n| n as f64 / 100.0)),
        any::<bool>(),
    )
        .prop_map(|(id, origin, ty, pol, v, u, c, hint, first)| Evidence {
            claim: format!("claim {id}"),
            urls: vec![format!("https://news.example/{id}")],
            id,
            polarity: pol,
            evidence_type: ty,
            published_at: Some("2025-06-01T12:00:00Z".to_string()),
            origin_id: origin,
            first_report: first,
            verifiability: v,
            corroborations_indep: c,
            consistency: u,
            log_lr_hint: hint,
        })
}

// ── Polarity ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn polarity_accepts_only_unit_integers(raw in any::<i8>()) {
        let parsed = serde_json::from_str::<Polarity>(&raw.to_string());
        match raw {
            1 | -1 => {
                let polarity = parsed.unwrap();
                prop_assert_eq!(polarity.sign(), raw as f64);
                prop_assert_eq!(i8::from(polarity), raw);
            }
            _ => prop_assert!(parsed.is_err()),
        }
    }
}

// ── Evidence ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn evidence_json_roundtrip(ev in arb_evidence()) {
        let json = serde_json::to_string(&ev).unwrap();
        let back: Evidence = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, ev);
    }

    #[test]
    fn origin_key_is_never_blank(ev in arb_evidence()) {
        let key = ev.origin_key();
        prop_assert!(!key.trim().is_empty());
        if ev.origin_id.trim().is_empty() {
            prop_assert_eq!(key, ev.id.as_str());
        } else {
            prop_assert_eq!(key, ev.origin_id.as_str());
        }
    }
}

// ── TypeCaps ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cap_reads_the_matching_field(
        a in 0.1f64..5.0,
        b in 0.1f64..5.0,
        c in 0.1f64..5.0,
        d in 0.1f64..5.0,
        ty in arb_type(),
    ) {
        let caps = TypeCaps { a, b, c, d };
        let expected = match ty {
            EvidenceType::A => a,
            EvidenceType::B => b,
            EvidenceType::C => c,
            EvidenceType::D => d,
        };
        prop_assert_eq!(caps.cap(ty), expected);
    }

    #[test]
    fn default_caps_are_positive_and_ordered(ty in arb_type()) {
        let caps = TypeCaps::default();
        prop_assert!(caps.cap(ty) > 0.0);
        prop_assert!(caps.cap(ty) <= caps.cap(EvidenceType::A));
        prop_assert!(caps.cap(ty) >= caps.cap(EvidenceType::D));
    }
}
