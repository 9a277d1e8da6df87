use arbscope_types::num::{self, MagnitudeKind};
use arbscope_types::{dex, ClassifyDefaults, Thresholds, Tier};
use serde_json::{json, Value};

#[test]
fn test_coercion_feeds_classification() {
    let defaults = ClassifyDefaults::default();

    // A present score classifies by the ladder.
    let score = num::to_num(&json!("0.42"));
    assert_eq!(
        Thresholds::RISK_SCORE.classify_or(score, defaults.risk),
        Tier::Medium
    );

    // A missing score falls back to the configured default, not Low.
    let absent = num::to_num(&Value::Null);
    assert_eq!(
        Thresholds::RISK_SCORE.classify_or(absent, defaults.risk),
        Tier::High
    );
}

#[test]
fn test_currency_placeholder_for_every_absent_shape() {
    for v in [
        Value::Null,
        json!(""),
        json!("abc"),
        json!("not-a-number"),
        json!([1, 2]),
    ] {
        assert_eq!(num::fmt_currency(num::to_num(&v)), num::PLACEHOLDER, "input: {v}");
    }
}

#[test]
fn test_magnitude_never_renders_the_lower_unit_at_a_boundary() {
    let s = num::format_magnitude(1_000_000.0, MagnitudeKind::Currency);
    assert_eq!(s, "$1.00M");
    assert!(!s.contains('K'), "exact 1e6 must not render as K: {s}");
}

#[test]
fn test_dex_canonicalization_survives_round_trips() {
    // Canonical output is a fixed point of canonicalization.
    for raw in ["UNISWAP_V3", "sushi", "Curve", "some_unknown_dex"] {
        let once = dex::canonicalize(raw);
        assert_eq!(dex::canonicalize(&once), once);
    }
}
