//! UAE mobile number validation
//!
//! Numbers are normalized to their 9 subscriber-significant digits before any
//! check runs. This is the only accepted algorithm: a bare 10-digit number is
//! valid only when its leading digit is the `0` trunk prefix.

use crate::config::ValidatorConfig;

/// Digits left after the country code or trunk prefix is removed
pub const SUBSCRIBER_DIGITS: usize = 9;

/// Validates a mobile number
///
/// A wrong digit count stops validation, since the prefix check is
/// meaningless on a number of the wrong length.
pub fn validate_mobile(mobile: &str, config: &ValidatorConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let mobile = mobile.trim();

    if mobile.is_empty() {
        errors.push("Mobile number is required".to_string());
        return errors;
    }

    let national = match normalize_mobile(mobile, config) {
        Some(national) => national,
        None => {
            errors.push(format!(
                "Mobile number must be {} digits after country code",
                SUBSCRIBER_DIGITS
            ));
            return errors;
        }
    };

    if !config.allowed_mobile_prefixes.contains(&national[..2]) {
        errors.push(format!(
            "Invalid mobile number prefix. Must start with: {}",
            config.prefix_list()
        ));
    }

    errors
}

/// Canonical 9-digit form of a mobile number, if it has one
///
/// Spaces, dashes and parentheses are dropped, then at most one of these is
/// stripped, first match wins: `+<cc>`, `<cc>`, `00<cc>`, a single `0`.
///
/// # Examples
/// ```
/// use fieldcheck_validation::{normalize_mobile, ValidatorConfig};
/// let config = ValidatorConfig::default();
/// assert_eq!(normalize_mobile("+971 50 123 4567", &config).as_deref(), Some("501234567"));
/// assert_eq!(normalize_mobile("5012345678", &config), None);
/// ```
pub fn normalize_mobile(raw: &str, config: &ValidatorConfig) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    let national = strip_prefix(&cleaned, &config.country_code);

    if national.len() == SUBSCRIBER_DIGITS && national.bytes().all(|b| b.is_ascii_digit()) {
        Some(national.to_string())
    } else {
        None
    }
}

fn strip_prefix<'a>(number: &'a str, country_code: &str) -> &'a str {
    if !country_code.is_empty() {
        if let Some(rest) = number
            .strip_prefix('+')
            .and_then(|n| n.strip_prefix(country_code))
        {
            return rest;
        }
        if let Some(rest) = number.strip_prefix(country_code) {
            return rest;
        }
        if let Some(rest) = number
            .strip_prefix("00")
            .and_then(|n| n.strip_prefix(country_code))
        {
            return rest;
        }
    }

    number.strip_prefix('0').unwrap_or(number)
}
