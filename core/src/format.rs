use chrono::{DateTime, Utc};

/// `YYYY-MM-DD HH:MM:SS` in UTC. Input that is not RFC 3339 is returned
/// as is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(time) => time
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Zero for missing counts, as the tables show them.
pub fn count(value: Option<u64>) -> u64 {
    value.unwrap_or(0)
}

/// `-` for absent or empty text.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_in_utc() {
        assert_eq!(format_timestamp("2024-05-01T10:00:00.000Z"), "2024-05-01 10:00:00");
        assert_eq!(format_timestamp("2024-05-01T12:30:15+02:00"), "2024-05-01 10:30:15");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn placeholders() {
        assert_eq!(count(None), 0);
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("/hi/")), "/hi/");
    }
}
