use chrono::{DateTime, Utc};

/// Formats the distance between `then` and `now` the way the refresh
/// indicator shows it, e.g. "less than a minute ago" or "3 minutes ago".
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_seconds() < 0 {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    match (days, hours, minutes) {
        (0, 0, 0) => "less than a minute ago".to_string(),
        (0, 0, 1) => "1 minute ago".to_string(),
        (0, 0, m) => format!("{m} minutes ago"),
        (0, 1, _) => "about 1 hour ago".to_string(),
        (0, h, _) => format!("about {h} hours ago"),
        (1, _, _) => "1 day ago".to_string(),
        (d, _, _) => format!("{d} days ago"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_recent() {
        assert_eq!(
            format_relative(now() - Duration::seconds(20), now()),
            "less than a minute ago"
        );
        assert_eq!(format_relative(now() + Duration::seconds(5), now()), "just now");
    }

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(format_relative(now() - Duration::seconds(90), now()), "1 minute ago");
        assert_eq!(format_relative(now() - Duration::minutes(12), now()), "12 minutes ago");
        assert_eq!(format_relative(now() - Duration::minutes(65), now()), "about 1 hour ago");
        assert_eq!(format_relative(now() - Duration::hours(5), now()), "about 5 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(format_relative(now() - Duration::hours(30), now()), "1 day ago");
        assert_eq!(format_relative(now() - Duration::days(4), now()), "4 days ago");
    }
}
