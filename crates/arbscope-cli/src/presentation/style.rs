use arbscope_types::TierStyle;
use owo_colors::OwoColorize;

/// Map a semantic style token to terminal color. Pad cells before
/// painting so ANSI escapes never count toward column widths.
pub fn paint(text: &str, style: TierStyle, enable_color: bool) -> String {
    if !enable_color {
        return text.to_string();
    }
    match style {
        TierStyle::Positive => text.green().to_string(),
        TierStyle::Caution => text.yellow().to_string(),
        TierStyle::Critical => text.red().to_string(),
        TierStyle::Info => text.blue().to_string(),
        TierStyle::Muted => text.bright_black().to_string(),
    }
}

/// Dim section metadata (timestamps, counts) without semantic color.
pub fn dim(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.bright_black().to_string()
    } else {
        text.to_string()
    }
}

/// Section headers.
pub fn heading(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.bright_white().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Green/red by sign, used for P&L and change columns.
pub fn paint_signed(text: &str, value: Option<f64>, enable_color: bool) -> String {
    match value {
        Some(v) if v < 0.0 => paint(text, TierStyle::Critical, enable_color),
        Some(_) => paint(text, TierStyle::Positive, enable_color),
        None => dim(text, enable_color),
    }
}
