use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Format an epoch timestamp as `YYYY-MM-DD HH:MM:SS` in local time.
///
/// `is_ms` selects between millisecond and second epochs; backend models
/// carry millisecond timestamps.
pub fn timestamp_to_time(timestamp: i64, is_ms: bool) -> String {
    let millis = if is_ms { timestamp } else { timestamp * 1000 };
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` local time string back to an epoch
/// timestamp, in milliseconds or seconds.
pub fn time_to_timestamp(time: &str, is_ms: bool) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S").ok()?;
    let dt: DateTime<Local> = Local.from_local_datetime(&naive).single()?;
    let millis = dt.timestamp_millis();
    Some(if is_ms { millis } else { millis / 1000 })
}

/// Insert thousands separators into a number's decimal representation.
pub fn commafy(num: i64) -> String {
    let raw = num.unsigned_abs().to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    if num < 0 {
        out.push('-');
    }
    let first_group = raw.len() % 3;
    for (i, ch) in raw.chars().enumerate() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Strip HTML tags from a string, keeping only text content.
pub fn remove_html_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commafy_groups_of_three() {
        assert_eq!(commafy(0), "0");
        assert_eq!(commafy(999), "999");
        assert_eq!(commafy(1000), "1,000");
        assert_eq!(commafy(1234567), "1,234,567");
        assert_eq!(commafy(-1234567), "-1,234,567");
    }

    #[test]
    fn test_timestamp_round_trip() {
        let formatted = timestamp_to_time(1700000000000, true);
        let restored = time_to_timestamp(&formatted, true).unwrap();
        // Formatting drops sub-second precision only.
        assert_eq!(restored, 1700000000000);
    }

    #[test]
    fn test_timestamp_seconds_epoch() {
        assert_eq!(
            timestamp_to_time(1700000000, false),
            timestamp_to_time(1700000000000, true)
        );
    }

    #[test]
    fn test_remove_html_tags() {
        assert_eq!(remove_html_tags("<b>bold</b> text"), "bold text");
        assert_eq!(remove_html_tags("no tags"), "no tags");
        assert_eq!(remove_html_tags("<br/>"), "");
    }

    #[test]
    fn test_time_to_timestamp_rejects_garbage() {
        assert_eq!(time_to_timestamp("not a time", true), None);
    }
}
