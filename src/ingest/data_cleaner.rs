// ==========================================
// Stock Aging Analytics - value coercers
// ==========================================
// Responsibility: locale-aware numeric and date coercion
// Red line: row-local and pure; failure yields None, never an error
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};

/// Coerce a pt-BR quantity cell into a float.
///
/// The export writes quantities with `,` as the decimal separator and,
/// for large values, `.` as the thousands separator (`1.234,500`).
/// Dots are only stripped as thousands separators when a decimal comma
/// is present; a plain `123.45` still parses as-is.
///
/// Returns None on anything unparseable; the row filter decides the fate
/// of the row. Non-finite parses ("NaN", "inf") are rejected too: a
/// single NaN quantity would poison every downstream sum.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a movement-date cell into a calendar date.
///
/// The export renders dates year-first (`2025-02-05`), optionally with a
/// time component when the cell came from an Excel datetime. No day-first
/// inference is attempted.
pub fn parse_movement_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Trim a text cell; empty cells read as None.
pub fn parse_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
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
    fn test_parse_quantity_decimal_comma() {
        assert_eq!(parse_quantity("10,500"), Some(10.5));
        assert_eq!(parse_quantity("0,001"), Some(0.001));
    }

    #[test]
    fn test_parse_quantity_thousands_separator() {
        assert_eq!(parse_quantity("1.234,500"), Some(1234.5));
        assert_eq!(parse_quantity("12.345.678,900"), Some(12345678.9));
    }

    #[test]
    fn test_parse_quantity_plain_forms() {
        assert_eq!(parse_quantity("250"), Some(250.0));
        // No decimal comma: the dot is a decimal point, not a separator
        assert_eq!(parse_quantity("123.45"), Some(123.45));
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("  "), None);
        assert_eq!(parse_quantity("12,34,56"), None);
    }

    #[test]
    fn test_parse_quantity_rejects_non_finite() {
        // f64::from_str accepts these spellings; the coercer must not
        assert_eq!(parse_quantity("NaN"), None);
        assert_eq!(parse_quantity("nan"), None);
        assert_eq!(parse_quantity("inf"), None);
        assert_eq!(parse_quantity("-inf"), None);
        assert_eq!(parse_quantity("infinity"), None);
    }

    #[test]
    fn test_parse_movement_date_iso() {
        assert_eq!(
            parse_movement_date("2025-02-05"),
            NaiveDate::from_ymd_opt(2025, 2, 5)
        );
    }

    #[test]
    fn test_parse_movement_date_with_time() {
        assert_eq!(
            parse_movement_date("2025-02-05 14:30:00"),
            NaiveDate::from_ymd_opt(2025, 2, 5)
        );
    }

    #[test]
    fn test_parse_movement_date_rejects_invalid() {
        assert_eq!(parse_movement_date("31/31/2025"), None);
        assert_eq!(parse_movement_date("2025-13-40"), None);
        assert_eq!(parse_movement_date(""), None);
        // Day-first rendering is not inferred
        assert_eq!(parse_movement_date("05/02/2025"), None);
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_text("  KG "), Some("KG".to_string()));
        assert_eq!(parse_text("   "), None);
    }
}
