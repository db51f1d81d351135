//! Parsing helpers for dates and amounts.

use chrono::{Local, NaiveDate};

/// Resolve the reference date for month-bucketed reports.
///
/// `--date` values must be `YYYY-MM-DD`; absent means today (local time).
pub fn parse_reference_date(value: Option<&str>) -> anyhow::Result<NaiveDate> {
    match value {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", raw)),
        None => Ok(Local::now().date_naive()),
    }
}

/// Validate a transaction date argument, returning it unchanged.
///
/// Stored dates stay strings (the ledger's persisted shape), but the CLI
/// rejects unparseable input up front rather than storing a record that
/// every monthly report would silently skip.
pub fn validate_date(value: &str) -> anyhow::Result<String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", value))?;
    Ok(value.to_string())
}

/// Reject negative or non-finite amounts; the ledger stores magnitudes.
pub fn validate_amount(amount: f64) -> anyhow::Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(anyhow::anyhow!(
            "Amount must be a non-negative number, got {}",
            amount
        ));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_reference_date_explicit() {
        let date = parse_reference_date(Some("2024-01-20")).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 20));
    }

    #[test]
    fn test_parse_reference_date_invalid() {
        assert!(parse_reference_date(Some("01/20/2024")).is_err());
        assert!(parse_reference_date(Some("2024-13-01")).is_err());
    }

    #[test]
    fn test_parse_reference_date_defaults_to_today() {
        assert!(parse_reference_date(None).is_ok());
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date("2024-06-03").unwrap(), "2024-06-03");
        assert!(validate_date("tomorrow").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(0.0).unwrap(), 0.0);
        assert_eq!(validate_amount(49.99).unwrap(), 49.99);
        assert!(validate_amount(-1.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
    }
}
