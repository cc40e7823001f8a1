//! Date and time display helpers.
//!
//! The API sends ISO-8601 strings; anything that does not parse is shown as-is.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(value: &str) -> String {
    match parse_datetime(value) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

pub fn format_optional_datetime(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string())
}

/// Today's date as `YYYY-MM-DD`, for `<input type="date">` defaults.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31.12.2024 23:59");
        assert_eq!(format_datetime("2024-12-31 08:05:00"), "31.12.2024 08:05");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_optional_datetime(&None), "-");
    }
}
