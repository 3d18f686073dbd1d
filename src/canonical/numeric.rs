//! Decimal-exact numeric canonicalization.
//!
//! The winning token is normalized with pure string surgery rather than a float
//! round-trip, so values like `0.1` keep their exact decimal form and two
//! numerically equal inputs always normalize to bit-identical strings.

use once_cell::sync::Lazy;
use regex::Regex;

/// Plain-number tokens: optional sign, optional leading dot, digits and an
/// optional fractional part. Commas are stripped before this pattern is applied.
static NUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-+]?\d*\.?\d+").unwrap());

/// Extracts the last numeric token from `s` and returns its canonical decimal form.
///
/// Thousands-separator commas are stripped before matching. Returns `None` when no
/// numeric token is found. The canonicalization is idempotent:
/// `canonicalize_numeric(c) == Some(c)` for any canonical form `c`.
pub fn canonicalize_numeric(s: &str) -> Option<String> {
    if s.is_empty() {
        return None;
    }
    let cleaned = s.replace(',', "");
    let token = NUM_RE.find_iter(&cleaned).last()?.as_str();
    let token = token.strip_prefix('+').unwrap_or(token);
    Some(normalize_decimal(token))
}

/// Normalizes a `[sign]digits[.digits]` token to its canonical decimal rendering:
/// no leading integer zeros, no trailing fractional zeros, no dangling decimal
/// point, `.75` rendered as `0.75`, and negative zero collapsed to `0`.
fn normalize_decimal(token: &str) -> String {
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let (int_raw, frac_raw) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (unsigned, ""),
    };

    let int_part = int_raw.trim_start_matches('0');
    let frac_part = frac_raw.trim_end_matches('0');

    // All digits were zeros: the sign is dropped along with them.
    if int_part.is_empty() && frac_part.is_empty() {
        return "0".to_string();
    }

    let mut out = String::with_capacity(token.len() + 1);
    if negative {
        out.push('-');
    }
    out.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_number_wins() {
        assert_eq!(
            canonicalize_numeric("first 3, then 7, finally 42"),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_no_number_yields_none() {
        assert_eq!(canonicalize_numeric("no digits at all"), None);
        assert_eq!(canonicalize_numeric(""), None);
    }

    #[test]
    fn test_thousands_separators_stripped() {
        assert_eq!(canonicalize_numeric("total: 1,234,567"), Some("1234567".to_string()));
        assert_eq!(canonicalize_numeric("1,234.56"), Some("1234.56".to_string()));
    }

    #[test]
    fn test_trailing_fractional_zeros_stripped() {
        assert_eq!(canonicalize_numeric("3.50"), Some("3.5".to_string()));
        assert_eq!(canonicalize_numeric("2.000"), Some("2".to_string()));
    }

    #[test]
    fn test_leading_integer_zeros_stripped() {
        assert_eq!(canonicalize_numeric("007"), Some("7".to_string()));
        assert_eq!(canonicalize_numeric("000.25"), Some("0.25".to_string()));
    }

    #[test]
    fn test_bare_leading_dot() {
        assert_eq!(canonicalize_numeric(".75"), Some("0.75".to_string()));
    }

    #[test]
    fn test_explicit_plus_sign_dropped() {
        assert_eq!(canonicalize_numeric("+12"), Some("12".to_string()));
    }

    #[test]
    fn test_negative_values_keep_sign() {
        assert_eq!(canonicalize_numeric("-12"), Some("-12".to_string()));
        assert_eq!(canonicalize_numeric("-0.5"), Some("-0.5".to_string()));
    }

    #[test]
    fn test_negative_zero_collapses() {
        assert_eq!(canonicalize_numeric("-0"), Some("0".to_string()));
        assert_eq!(canonicalize_numeric("-0.0"), Some("0".to_string()));
        assert_eq!(canonicalize_numeric("-0.000"), Some("0".to_string()));
    }

    #[test]
    fn test_exact_decimal_no_float_drift() {
        assert_eq!(canonicalize_numeric("0.1"), Some("0.1".to_string()));
        assert_eq!(
            canonicalize_numeric("12345678901234567890.1"),
            Some("12345678901234567890.1".to_string())
        );
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "the result is 42",
            "3.50",
            "+12",
            "-0.0",
            ".75",
            "1,234.5600",
            "-12.5",
        ];
        for input in inputs {
            let once = canonicalize_numeric(input).unwrap();
            let twice = canonicalize_numeric(&once).unwrap();
            assert_eq!(once, twice, "canonicalization of '{input}' is not idempotent");
        }
    }
}
