use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Label shown when an exchange field is empty or missing entirely.
pub const UNKNOWN_DEX: &str = "N/A";

/// Canonical key → preferred display label.
static DEX_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("uniswap", "Uniswap"),
        ("uniswap_v2", "Uniswap V2"),
        ("uniswap_v3", "Uniswap V3"),
        ("sushiswap", "SushiSwap"),
        ("curve", "Curve"),
        ("balancer", "Balancer"),
        ("raydium", "Raydium"),
        ("pancakeswap", "PancakeSwap"),
        ("osmosis", "Osmosis"),
        ("pulsex", "PulseX"),
        ("pumpswap", "PumpSwap"),
        ("swappi", "Swappi"),
        // aggregators
        ("1inch", "1inch"),
        ("openocean", "OpenOcean"),
    ])
});

/// Observed spelling (separator-normalized, lowercase) → canonical key.
static DEX_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("uniswap", "uniswap"),
        ("uniswap v2", "uniswap_v2"),
        ("uniswap_v2", "uniswap_v2"),
        ("v2", "uniswap_v2"),
        ("uniswap v3", "uniswap_v3"),
        ("uniswap_v3", "uniswap_v3"),
        ("v3", "uniswap_v3"),
        ("sushi", "sushiswap"),
        ("sushiswap", "sushiswap"),
        ("curve", "curve"),
        ("balancer", "balancer"),
        ("raydium", "raydium"),
        ("pancakeswap", "pancakeswap"),
        ("osmosis", "osmosis"),
        ("pulsex", "pulsex"),
        ("pumpswap", "pumpswap"),
        ("swappi", "swappi"),
        ("1inch", "1inch"),
        ("openocean", "openocean"),
    ])
});

/// Resolve a free-form exchange identifier to its canonical display label.
///
/// First match wins: exact label (case-insensitive), then the alias table
/// keyed by a separator-normalized form, then by a snake_case form. An
/// unrecognized identifier passes through unchanged — except address-like
/// identifiers, which shorten to `0xabcdef…1234`. This function must never
/// substitute or hide a value it does not recognize.
pub fn canonicalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UNKNOWN_DEX.to_string();
    }

    for label in DEX_LABELS.values() {
        if label.eq_ignore_ascii_case(trimmed) {
            return (*label).to_string();
        }
    }

    let cleaned = normalize_words(trimmed);
    if let Some(canonical) = DEX_ALIASES.get(cleaned.as_str()) {
        return label_for(canonical);
    }

    let snake = cleaned.replace(' ', "_");
    if let Some(canonical) = DEX_ALIASES.get(snake.as_str()) {
        return label_for(canonical);
    }

    if is_address_like(trimmed) {
        return shorten_address(trimmed);
    }

    trimmed.to_string()
}

/// Canonicalize an optional field, treating `None` like an empty string.
pub fn canonicalize_opt(raw: Option<&str>) -> String {
    canonicalize(raw.unwrap_or(""))
}

fn label_for(canonical: &str) -> String {
    DEX_LABELS
        .get(canonical)
        .map(|label| (*label).to_string())
        .unwrap_or_else(|| canonical.to_string())
}

/// Replace non-alphanumerics with spaces, collapse runs, lowercase.
fn normalize_words(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hex contract address: "0x" followed by at least 8 hex characters.
fn is_address_like(s: &str) -> bool {
    s.len() >= 10
        && s.starts_with("0x")
        && s[2..].chars().all(|c| c.is_ascii_hexdigit())
}

fn shorten_address(s: &str) -> String {
    if s.len() <= 12 {
        return s.to_string();
    }
    format!("{}…{}", &s[..6], &s[s.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varied_spellings_share_a_label() {
        let expected = canonicalize("uniswap_v3");
        assert_eq!(expected, "Uniswap V3");
        assert_eq!(canonicalize("UNISWAP_V3"), expected);
        assert_eq!(canonicalize("Uniswap-V3"), expected);
        assert_eq!(canonicalize("v3"), expected);
        assert_eq!(canonicalize("Uniswap V3"), expected);
    }

    #[test]
    fn test_exact_label_match_is_case_insensitive() {
        assert_eq!(canonicalize("sushiswap"), "SushiSwap");
        assert_eq!(canonicalize("PANCAKESWAP"), "PancakeSwap");
        assert_eq!(canonicalize("1inch"), "1inch");
    }

    #[test]
    fn test_unknown_passes_through_unchanged() {
        assert_eq!(canonicalize("some_unknown_dex"), "some_unknown_dex");
        assert_eq!(canonicalize("QuickSwap"), "QuickSwap");
    }

    #[test]
    fn test_empty_and_absent_become_na() {
        assert_eq!(canonicalize(""), UNKNOWN_DEX);
        assert_eq!(canonicalize("   "), UNKNOWN_DEX);
        assert_eq!(canonicalize_opt(None), UNKNOWN_DEX);
    }

    #[test]
    fn test_address_like_identifiers_shorten() {
        let addr = "0x7a250d5630b4cf539739df2c5dacb4c659f2488d";
        assert_eq!(canonicalize(addr), "0x7a25…488d");
        // Short hex stays as-is
        assert_eq!(canonicalize("0xabcdef12"), "0xabcdef12");
    }
}
