/// Truncate to a maximum number of characters, appending "..." when cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Pad or truncate to an exact column width (char-based).
pub fn pad(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    format!("{:<width$}", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 9), "a long...");
    }

    #[test]
    fn test_pad_is_exact() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "a...");
    }
}
