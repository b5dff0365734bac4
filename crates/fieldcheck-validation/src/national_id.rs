//! Emirates ID validation, check digit and fixture generation
//!
//! An Emirates ID is 15 digits laid out as `784-YYYY-NNNNNNN-C`: the issuing
//! authority prefix, the holder's birth year, a 7-digit sequence and a
//! trailing check digit computed with a weighted mod-11 sum over the first 14
//! digits (weights 1 through 14).

use crate::config::ValidatorConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// Total number of digits in an Emirates ID
pub const ID_LENGTH: usize = 15;

/// Prefix used by [`generate_valid_eid`]
pub const DEFAULT_PREFIX: &str = "784";

// 3-4-7-1 groups, at most one separator between groups
static GROUPING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}[-\s]?[0-9]{4}[-\s]?[0-9]{7}[-\s]?[0-9]$")
        .expect("grouping pattern compiles")
});

/// Validates an Emirates ID
///
/// Separators (whitespace and dashes) are ignored for the digit count. Once
/// the value has 15 digits, the prefix, grouping and checksum rules are all
/// evaluated and every failure is reported.
pub fn validate_national_id(eid: &str, config: &ValidatorConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let eid = eid.trim();

    if eid.is_empty() {
        errors.push("Emirates ID is required".to_string());
        return errors;
    }

    let digits = strip_separators(eid);
    if digits.len() != ID_LENGTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(format!("Emirates ID must be exactly {} digits", ID_LENGTH));
        return errors;
    }

    if let Some(prefix) = config.required_prefix.as_deref().filter(|p| !p.is_empty()) {
        if !digits.starts_with(prefix) {
            errors.push(format!("Emirates ID must start with {}", prefix));
        }
    }

    if config.grouping_enabled && !GROUPING_REGEX.is_match(eid) {
        errors.push("Emirates ID format should be XXX-YYYY-XXXXXXX-X".to_string());
    }

    if config.checksum_enabled && !has_valid_checksum(&digits) {
        errors.push("Invalid Emirates ID checksum".to_string());
    }

    errors
}

/// Computes the check digit for the first 14 digits (each 0..=9)
///
/// `check = 11 - (sum(d[i] * (i + 1)) mod 11)`, with 11 mapped to 0 and 10
/// mapped to 1.
pub fn check_digit(digits: &[u8; 14]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (i as u32 + 1))
        .sum();

    match 11 - (sum % 11) {
        11 => 0,
        10 => 1,
        check => check as u8,
    }
}

/// True when `digits` is 15 ASCII digits whose last digit matches [`check_digit`]
pub fn has_valid_checksum(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    if bytes.len() != ID_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let mut body = [0u8; 14];
    for (slot, b) in body.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }

    check_digit(&body) == bytes[14] - b'0'
}

/// Builds a checksum-valid Emirates ID with the `784` prefix
///
/// Intended for test fixtures and the example hints on the form page.
///
/// # Examples
/// ```
/// use fieldcheck_validation::national_id::{generate_valid_eid, has_valid_checksum};
/// let eid = generate_valid_eid(2000, 1234567).unwrap();
/// assert!(eid.starts_with("78420001234567"));
/// assert!(has_valid_checksum(&eid));
/// ```
pub fn generate_valid_eid(year: u16, sequence: u32) -> Result<String, String> {
    generate_with_prefix(DEFAULT_PREFIX, year, sequence)
}

/// Builds a checksum-valid 15-digit ID from a 3-digit prefix, year and sequence
pub fn generate_with_prefix(prefix: &str, year: u16, sequence: u32) -> Result<String, String> {
    if prefix.len() != 3 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Prefix must be exactly 3 digits, got '{}'", prefix));
    }
    if year > 9999 {
        return Err(format!("Year must be at most 4 digits, got {}", year));
    }
    if sequence > 9_999_999 {
        return Err(format!("Sequence must be at most 7 digits, got {}", sequence));
    }

    let base = format!("{}{:04}{:07}", prefix, year, sequence);

    let mut body = [0u8; 14];
    for (slot, b) in body.iter_mut().zip(base.bytes()) {
        *slot = b - b'0';
    }

    Ok(format!("{}{}", base, check_digit(&body)))
}

/// Re-groups whatever has been typed so far as `XXX-YYYY-XXXXXXX-X`
///
/// Separators are dropped first and anything past the 15th character is
/// discarded, so repeated application is stable.
pub fn format_national_id(raw: &str) -> String {
    let compact: Vec<char> = strip_separators(raw).chars().take(ID_LENGTH).collect();
    let mut formatted = String::with_capacity(ID_LENGTH + 3);

    for (i, c) in compact.iter().enumerate() {
        if i == 3 || i == 7 || i == 14 {
            formatted.push('-');
        }
        formatted.push(*c);
    }

    formatted
}

fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}
