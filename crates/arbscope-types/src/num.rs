use serde_json::Value;

/// Glyph rendered wherever a numeric field is absent or unusable.
pub const PLACEHOLDER: &str = "—";

/// Coerce an arbitrary JSON value to a finite number.
///
/// The backend emits numbers, numeric strings, nulls, and occasionally
/// garbage for the same field across records. Everything that is not a
/// finite number becomes `None`; in particular NaN and ±Infinity never
/// escape this function. `0` is a present value, not an absent one.
pub fn to_num(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Fixed-point rendering of a coerced JSON value, placeholder on absence.
pub fn fmt(v: &Value, digits: usize) -> String {
    fmt_f64(to_num(v), digits)
}

/// Fixed-point rendering of an already-normalized value.
pub fn fmt_f64(v: Option<f64>, digits: usize) -> String {
    match v {
        Some(n) => format!("{:.*}", digits, n),
        None => PLACEHOLDER.to_string(),
    }
}

/// Percent rendering ("12.3%"), placeholder on absence.
pub fn fmt_pct(v: Option<f64>, digits: usize) -> String {
    match v {
        Some(n) => format!("{:.*}%", digits, n),
        None => PLACEHOLDER.to_string(),
    }
}

/// Percent rendering with an explicit sign for non-negative values
/// ("+2.41%" / "-1.07%"), used by the change columns.
pub fn fmt_signed_pct(v: Option<f64>, digits: usize) -> String {
    match v {
        Some(n) if n >= 0.0 => format!("+{:.*}%", digits, n),
        Some(n) => format!("{:.*}%", digits, n),
        None => PLACEHOLDER.to_string(),
    }
}

/// USD rendering with thousands grouping ("$1,234.56").
///
/// Sub-cent magnitudes widen to six fraction digits so micro-priced tokens
/// do not collapse to "$0.00". Absent values render the placeholder glyph.
pub fn fmt_currency(v: Option<f64>) -> String {
    let Some(n) = v else {
        return PLACEHOLDER.to_string();
    };
    let digits = if n != 0.0 && n.abs() < 0.01 { 6 } else { 2 };
    let body = group_thousands(&format!("{:.*}", digits, n.abs()));
    if n < 0.0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// What a magnitude-compressed number denominates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagnitudeKind {
    /// USD amounts: "$1.20M", base format "$853.10"
    Currency,
    /// Unit counts (token supply): "19.84M", base format "853"
    Count,
}

/// Ascending unit ladder; the largest applicable unit wins, and exact
/// boundary values select the higher unit (1_000_000 → "1.00M").
const MAGNITUDE_UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Compress a large number with a K/M/B/T suffix, preserving sign.
///
/// Values below the smallest unit render in the base format of their kind.
pub fn format_magnitude(n: f64, kind: MagnitudeKind) -> String {
    if !n.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    let abs = n.abs();

    for (unit, suffix) in MAGNITUDE_UNITS {
        if abs >= unit {
            let scaled = abs / unit;
            return match kind {
                MagnitudeKind::Currency => format!("{sign}${scaled:.2}{suffix}"),
                MagnitudeKind::Count => format!("{sign}{scaled:.2}{suffix}"),
            };
        }
    }

    match kind {
        MagnitudeKind::Currency => format!("{sign}${abs:.2}"),
        MagnitudeKind::Count => format!("{sign}{abs:.0}"),
    }
}

/// Insert comma separators into the integer part of a formatted decimal.
fn group_thousands(formatted: &str) -> String {
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_num_accepts_numbers_and_numeric_strings() {
        assert_eq!(to_num(&json!(1.5)), Some(1.5));
        assert_eq!(to_num(&json!(42)), Some(42.0));
        assert_eq!(to_num(&json!("3.25")), Some(3.25));
        assert_eq!(to_num(&json!(" 7 ")), Some(7.0));
    }

    #[test]
    fn test_to_num_zero_is_present() {
        assert_eq!(to_num(&json!(0)), Some(0.0));
        assert_eq!(to_num(&json!("0")), Some(0.0));
    }

    #[test]
    fn test_to_num_rejects_absent_and_garbage() {
        assert_eq!(to_num(&Value::Null), None);
        assert_eq!(to_num(&json!("")), None);
        assert_eq!(to_num(&json!("abc")), None);
        assert_eq!(to_num(&json!("NaN")), None);
        assert_eq!(to_num(&json!("Infinity")), None);
        assert_eq!(to_num(&json!(true)), None);
        assert_eq!(to_num(&json!({"nested": 1})), None);
    }

    #[test]
    fn test_fmt_placeholder() {
        assert_eq!(fmt(&Value::Null, 2), PLACEHOLDER);
        assert_eq!(fmt(&json!(1.005), 2), "1.00");
    }

    #[test]
    fn test_fmt_currency_grouping() {
        assert_eq!(fmt_currency(Some(1234567.891)), "$1,234,567.89");
        assert_eq!(fmt_currency(Some(0.0)), "$0.00");
        assert_eq!(fmt_currency(Some(-42.5)), "-$42.50");
    }

    #[test]
    fn test_fmt_currency_subcent_widens() {
        assert_eq!(fmt_currency(Some(0.000123)), "$0.000123");
        assert_eq!(fmt_currency(Some(0.0099)), "$0.009900");
    }

    #[test]
    fn test_fmt_currency_placeholder() {
        assert_eq!(fmt_currency(None), PLACEHOLDER);
    }

    #[test]
    fn test_signed_pct() {
        assert_eq!(fmt_signed_pct(Some(2.406), 2), "+2.41%");
        assert_eq!(fmt_signed_pct(Some(-1.0), 2), "-1.00%");
        assert_eq!(fmt_signed_pct(Some(0.0), 2), "+0.00%");
        assert_eq!(fmt_signed_pct(None, 2), PLACEHOLDER);
    }

    #[test]
    fn test_format_magnitude_ladder() {
        assert_eq!(format_magnitude(999.0, MagnitudeKind::Currency), "$999.00");
        assert_eq!(format_magnitude(1_000.0, MagnitudeKind::Currency), "$1.00K");
        assert_eq!(
            format_magnitude(1_000_000.0, MagnitudeKind::Currency),
            "$1.00M"
        );
        assert_eq!(
            format_magnitude(2_500_000_000.0, MagnitudeKind::Currency),
            "$2.50B"
        );
        assert_eq!(format_magnitude(1e12, MagnitudeKind::Currency), "$1.00T");
    }

    #[test]
    fn test_format_magnitude_count_and_sign() {
        assert_eq!(format_magnitude(19_840_000.0, MagnitudeKind::Count), "19.84M");
        assert_eq!(format_magnitude(853.4, MagnitudeKind::Count), "853");
        assert_eq!(
            format_magnitude(-1_200_000.0, MagnitudeKind::Currency),
            "-$1.20M"
        );
    }
}
