use chrono::{DateTime, Utc};

/// Format a timestamp as relative time ("2 min ago", "yesterday"),
/// placeholder when absent.
pub fn format_relative_time(ts: Option<DateTime<Utc>>) -> String {
    let Some(parsed) = ts else {
        return arbscope_types::num::PLACEHOLDER.to_string();
    };

    let now = Utc::now();
    let duration = now.signed_duration_since(parsed);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else {
        format!("{} days ago", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_recent_is_just_now() {
        assert_eq!(format_relative_time(Some(Utc::now())), "just now");
    }

    #[test]
    fn test_minutes_ago() {
        let ts = Utc::now() - Duration::minutes(5);
        assert_eq!(format_relative_time(Some(ts)), "5 min ago");
    }

    #[test]
    fn test_absent_renders_placeholder() {
        assert_eq!(format_relative_time(None), "—");
    }
}
