//! Locale identifiers and en_US-style number formatting.

use crate::validate::is_valid_number;

/// Locale identifier constants.
pub mod locale {
    /// Arabic.
    pub const AR: &str = "ar";
    /// English.
    pub const EN: &str = "en";
    /// English (United States).
    pub const EN_US: &str = "en_US";
}

/// Maximum number of fraction digits used by the plain decimal rendering.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Returns the primary language of a locale identifier: the part before the
/// first `-` or `_` separator.
///
/// # Examples
///
/// ```
/// use veneer_text::format::primary_language;
///
/// assert_eq!(primary_language("en-US"), "en");
/// assert_eq!(primary_language("en_US"), "en");
/// assert_eq!(primary_language("ar"), "ar");
/// ```
pub fn primary_language(locale_identifier: &str) -> &str {
    locale_identifier
        .split(['-', '_'])
        .next()
        .unwrap_or(locale_identifier)
}

/// Renders a number as a plain en_US-style decimal string: `.` as the
/// decimal separator, no grouping separators, at most three fraction digits
/// and no trailing fractional zeros.
///
/// Non-finite input renders as `"0"`.
pub fn international_string(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }

    let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
    let rounded = (value * scale).round() / scale;

    let mut text = format!("{rounded:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    if text == "-0" {
        text = "0".to_owned();
    }

    text
}

/// Parses a number from an optional string, returning 0 when the input is
/// absent or does not parse as a finite decimal.
pub fn number_from_string(s: Option<&str>) -> f64 {
    let Some(s) = s else { return 0.0 };

    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parses an unsigned decimal string, accepting any of the supported
/// decimal separators, or returns `None` when the input is not a valid
/// number shape.
pub fn decimal_from_string(s: &str) -> Option<f64> {
    if !is_valid_number(s) || s.is_empty() {
        return None;
    }

    let normalized: String = s
        .chars()
        .map(|c| if matches!(c, ',' | '٬' | '·' | '٫') { '.' } else { c })
        .collect();

    normalized.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primary_language() {
        assert_eq!(primary_language("en-US"), "en");
        assert_eq!(primary_language("en_US"), "en");
        assert_eq!(primary_language("zh-Hans-CN"), "zh");
        assert_eq!(primary_language("ar"), "ar");
        assert_eq!(primary_language(""), "");
    }

    #[test]
    fn test_international_string_integers() {
        assert_eq!(international_string(0.0), "0");
        assert_eq!(international_string(42.0), "42");
        assert_eq!(international_string(-7.0), "-7");
        assert_eq!(international_string(1234567.0), "1234567");
    }

    #[test]
    fn test_international_string_decimals() {
        assert_eq!(international_string(3.5), "3.5");
        assert_eq!(international_string(0.125), "0.125");
        // Rounded to three fraction digits.
        assert_eq!(international_string(1.23456), "1.235");
    }

    #[test]
    fn test_international_string_non_finite() {
        assert_eq!(international_string(f64::NAN), "0");
        assert_eq!(international_string(f64::INFINITY), "0");
    }

    #[test]
    fn test_number_from_string() {
        assert_eq!(number_from_string(Some("12.5")), 12.5);
        assert_eq!(number_from_string(Some("-3")), -3.0);
        assert_eq!(number_from_string(Some("not a number")), 0.0);
        assert_eq!(number_from_string(None), 0.0);
    }

    #[test]
    fn test_decimal_from_string() {
        assert_eq!(decimal_from_string("12.5"), Some(12.5));
        assert_eq!(decimal_from_string("12,5"), Some(12.5));
        assert_eq!(decimal_from_string("12"), Some(12.0));
        assert_eq!(decimal_from_string("1.2.3"), None);
        assert_eq!(decimal_from_string("-5"), None);
        assert_eq!(decimal_from_string(""), None);
    }
}
