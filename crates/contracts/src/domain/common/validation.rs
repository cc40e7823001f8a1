//! Form validation helpers.
//!
//! Each helper returns the human readable message shown next to the form, so
//! DTO `validate` methods can chain them with `?`.

/// Non-blank text field.
pub fn require_text(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(())
}

/// Text field with an upper length bound (in characters).
pub fn max_length(value: &str, max: usize, field: &str) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{} must be at most {} characters", field, max));
    }
    Ok(())
}

/// Strictly positive finite number.
pub fn require_positive(value: f64, field: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} must be greater than zero", field));
    }
    Ok(())
}

/// Zero or positive finite number.
pub fn require_non_negative(value: f64, field: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} cannot be negative", field));
    }
    Ok(())
}

/// Parses a money / decimal input. Accepts `,` as decimal separator and
/// ignores spaces used as thousand separators.
pub fn parse_amount(input: &str, field: &str) -> Result<f64, String> {
    let normalized: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return Err(format!("{} is required", field));
    }
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("{} must be a number", field)),
    }
}

/// Parses an optional amount: blank input means `None`.
pub fn parse_optional_amount(input: &str, field: &str) -> Result<Option<f64>, String> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(input, field).map(Some)
}

/// Parses a whole, strictly positive quantity.
pub fn parse_quantity(input: &str, field: &str) -> Result<i64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", field));
    }
    match trimmed.parse::<i64>() {
        Ok(v) if v > 0 => Ok(v),
        Ok(_) => Err(format!("{} must be at least 1", field)),
        Err(_) => Err(format!("{} must be a whole number", field)),
    }
}

/// Parses a whole number that may be zero (stock levels, thresholds).
pub fn parse_count(input: &str, field: &str) -> Result<i64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    match trimmed.parse::<i64>() {
        Ok(v) if v >= 0 => Ok(v),
        Ok(_) => Err(format!("{} cannot be negative", field)),
        Err(_) => Err(format!("{} must be a whole number", field)),
    }
}

/// PIN for sensitive actions: 4 to 6 ASCII digits. The server checks that it
/// belongs to the user.
pub fn validate_pin(pin: &str) -> Result<(), String> {
    let len = pin.len();
    if !(4..=6).contains(&len) || !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err("PIN must be 4 to 6 digits".to_string());
    }
    Ok(())
}

/// Minimal e-mail shape check; deliverability is the server's concern.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(l), Some(d), None) => (l, d),
        _ => return Err("Email address is not valid".to_string()),
    };
    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.chars().any(char::is_whitespace)
    {
        return Err("Email address is not valid".to_string());
    }
    Ok(())
}

/// Optional e-mail: blank passes.
pub fn validate_optional_email(email: &Option<String>) -> Result<(), String> {
    match email.as_deref().map(str::trim) {
        Some(e) if !e.is_empty() => validate_email(e),
        _ => Ok(()),
    }
}

/// `YYYY-MM-DD` date as produced by `<input type="date">`.
pub fn validate_date(value: &str, field: &str) -> Result<(), String> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| format!("{} must be a valid date", field))
}

/// Trims and turns blank strings into `None`.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("abc", "Name").is_ok());
        assert_eq!(require_text("   ", "Name").unwrap_err(), "Name is required");
    }

    #[test]
    fn test_numeric_ranges() {
        assert!(require_positive(0.01, "Amount").is_ok());
        assert!(require_positive(0.0, "Amount").is_err());
        assert!(require_positive(f64::NAN, "Amount").is_err());
        assert!(require_non_negative(0.0, "Cost").is_ok());
        assert!(require_non_negative(-0.5, "Cost").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50", "Price"), Ok(12.5));
        assert_eq!(parse_amount(" 12,5 ", "Price"), Ok(12.5));
        assert_eq!(parse_amount("1 234.56", "Price"), Ok(1234.56));
        assert_eq!(parse_amount("", "Price").unwrap_err(), "Price is required");
        assert_eq!(parse_amount("abc", "Price").unwrap_err(), "Price must be a number");
        assert!(parse_amount("inf", "Price").is_err());
        assert_eq!(parse_optional_amount("  ", "Cash"), Ok(None));
        assert_eq!(parse_optional_amount("5", "Cash"), Ok(Some(5.0)));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3", "Quantity"), Ok(3));
        assert_eq!(parse_quantity("0", "Quantity").unwrap_err(), "Quantity must be at least 1");
        assert_eq!(parse_quantity("1.5", "Quantity").unwrap_err(), "Quantity must be a whole number");
        assert_eq!(parse_count("", "Stock"), Ok(0));
        assert!(parse_count("-1", "Stock").is_err());
    }

    #[test]
    fn test_validate_pin() {
        assert!(validate_pin("1234").is_ok());
        assert!(validate_pin("123456").is_ok());
        assert!(validate_pin("123").is_err());
        assert!(validate_pin("1234567").is_err());
        assert!(validate_pin("12a4").is_err());
        assert!(validate_pin("١٢٣٤").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("clerk@shop.example").is_ok());
        assert!(validate_email("clerk@shop").is_err());
        assert!(validate_email("@shop.example").is_err());
        assert!(validate_email("a@b@c.d").is_err());
        assert!(validate_email("a b@shop.example").is_err());
        assert!(validate_optional_email(&None).is_ok());
        assert!(validate_optional_email(&Some("  ".into())).is_ok());
        assert!(validate_optional_email(&Some("nope".into())).is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-03-15", "Date").is_ok());
        assert!(validate_date("2024-02-30", "Date").is_err());
        assert!(validate_date("15.03.2024", "Date").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  x "), Some("x".to_string()));
        assert_eq!(non_empty("   "), None);
    }
}
