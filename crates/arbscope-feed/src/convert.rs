use chrono::{DateTime, Utc};
use serde_json::Value;

/// Extract the elements of a top-level array field, tolerating a missing
/// field, a null, or a wrongly-typed value. A body without the expected
/// collection yields zero records, never an error.
pub(crate) fn array_field<'a>(body: &'a Value, field: &str) -> Vec<&'a Value> {
    body.get(field)
        .and_then(Value::as_array)
        .map(|items| items.iter().collect())
        .unwrap_or_default()
}

/// Stringify an identifier that the backend emits as either a string or a
/// number, falling back to a caller-supplied default.
pub(crate) fn id_string(v: &Value, fallback: impl FnOnce() -> String) -> String {
    match v {
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => fallback(),
    }
}

/// Parse an RFC3339 timestamp, treating anything unparseable as absent.
pub(crate) fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Coerce through `to_num` and narrow to a non-negative integer count.
pub(crate) fn to_count(v: &Value) -> Option<u32> {
    let n = arbscope_types::num::to_num(v)?;
    (n >= 0.0 && n <= u32::MAX as f64).then_some(n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_field_tolerates_bad_shapes() {
        assert!(array_field(&json!({}), "tokens").is_empty());
        assert!(array_field(&json!({"tokens": null}), "tokens").is_empty());
        assert!(array_field(&json!({"tokens": "oops"}), "tokens").is_empty());
        assert_eq!(array_field(&json!({"tokens": [1, 2]}), "tokens").len(), 2);
    }

    #[test]
    fn test_id_string_accepts_both_shapes() {
        assert_eq!(id_string(&json!("eth"), || "x".into()), "eth");
        assert_eq!(id_string(&json!(7), || "x".into()), "7");
        assert_eq!(id_string(&json!(null), || "x".into()), "x");
    }

    #[test]
    fn test_parse_timestamp() {
        assert!(parse_timestamp(Some("2026-08-01T10:00:00Z")).is_some());
        assert!(parse_timestamp(Some("not a date")).is_none());
        assert!(parse_timestamp(None).is_none());
    }
}
