//! Duration formatting and parsing helpers.

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches duration strings like "1h30m", "25m", "90s", "1h".
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    let re = Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$").unwrap();
    re
});

/// Format a whole-second count as MM:SS.
#[must_use]
pub fn format_clock(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        return plural(d.num_seconds(), "second");
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => plural(m, "minute"),
        (h, 0) => plural(h, "hour"),
        (h, m) => format!("{}, {}", plural(h, "hour"), plural(m, "minute")),
    }
}

fn plural(count: i64, unit: &str) -> String {
    format!("{count} {unit}{}", if count == 1 { "" } else { "s" })
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is read as minutes. Values beyond what a duration can
/// hold are rejected rather than wrapped.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    // bare number: minutes
    if let Ok(minutes) = s.parse::<i64>() {
        return if minutes > 0 {
            Duration::try_minutes(minutes)
        } else {
            None
        };
    }

    let caps = DURATION_RE.captures(&s)?;
    let part = |i: usize| -> i64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0)
    };

    let total_seconds = part(1)
        .checked_mul(3600)
        .zip(part(2).checked_mul(60))
        .and_then(|(hours, minutes)| hours.checked_add(minutes))
        .and_then(|subtotal| subtotal.checked_add(part(3)))?;

    if total_seconds <= 0 {
        return None;
    }
    Duration::try_seconds(total_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(3661), "61:01");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::seconds(45)), "45 seconds");
        assert_eq!(format_duration(Duration::seconds(1)), "1 second");
    }

    #[test]
    fn test_parse_duration_bare_minutes() {
        assert_eq!(parse_duration("25"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration(" 5 "), Some(Duration::minutes(5)));
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("25m"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("1h"), Some(Duration::hours(1)));
        assert_eq!(parse_duration("1h30m"), Some(Duration::minutes(90)));
        assert_eq!(parse_duration("90s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("1m30s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("1H30M"), Some(Duration::minutes(90)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("0").is_none());
        assert!(parse_duration("0m").is_none());
        assert!(parse_duration("m30h").is_none());
    }

    #[test]
    fn test_parse_duration_out_of_range() {
        // numeric but too large for a duration: reject, never panic
        assert!(parse_duration("99999999999999999").is_none());
        assert!(parse_duration("9223372036854775807").is_none());
        assert!(parse_duration("9223372036854775807m").is_none());
        assert!(parse_duration("9999999999999999999h").is_none());
        assert!(parse_duration("9223372036854775807s").is_none());
    }
}
