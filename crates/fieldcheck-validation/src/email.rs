//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest address accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Longest domain part accepted
pub const MAX_DOMAIN_LENGTH: usize = 253;

// Local part, one @, domain with at least one dot and an alphabetic TLD
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("email pattern compiles"));

static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9.-]*[A-Za-z0-9]$").expect("domain pattern compiles")
});

/// Validates an email address
///
/// Reports every violated rule; only the required check stops early.
pub fn validate_email(email: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let email = email.trim();

    if email.is_empty() {
        errors.push("Email is required".to_string());
        return errors;
    }

    if !EMAIL_REGEX.is_match(email) {
        errors.push("Invalid email format".to_string());
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        errors.push(format!(
            "Email is too long (maximum {} characters)",
            MAX_EMAIL_LENGTH
        ));
    }

    if email.matches('@').count() != 1 {
        errors.push("Email must contain exactly one @ symbol".to_string());
    }

    if let Some(domain) = domain_of(email) {
        if domain.chars().count() > MAX_DOMAIN_LENGTH {
            errors.push("Domain part is too long".to_string());
        }
        if !DOMAIN_REGEX.is_match(domain) {
            errors.push("Invalid domain format".to_string());
        }
    }

    errors
}

/// Domain part of an address with exactly one `@`
pub fn domain_of(email: &str) -> Option<&str> {
    let mut parts = email.split('@');
    let _local = parts.next()?;
    let domain = parts.next()?;
    match parts.next() {
        Some(_) => None,
        None => Some(domain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("john.doe@company.co.uk")]
    #[case("user+tag@example-domain.com")]
    #[case("  padded@example.org  ")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(validate_email(email).is_empty(), "{email} should be valid");
    }

    #[test]
    fn test_empty_is_required_only() {
        assert_eq!(validate_email(""), vec!["Email is required"]);
        assert_eq!(validate_email("   "), vec!["Email is required"]);
    }

    #[test]
    fn test_double_at_reports_format_and_count() {
        let errors = validate_email("user@@example.com");
        assert_eq!(
            errors,
            vec![
                "Invalid email format",
                "Email must contain exactly one @ symbol",
            ]
        );
    }

    #[test]
    fn test_missing_at() {
        let errors = validate_email("bad-email");
        assert!(errors.contains(&"Invalid email format".to_string()));
        assert!(errors.contains(&"Email must contain exactly one @ symbol".to_string()));
    }

    #[test]
    fn test_short_tld() {
        assert_eq!(validate_email("user@example.c"), vec!["Invalid email format"]);
    }

    #[test]
    fn test_domain_with_leading_hyphen() {
        assert_eq!(
            validate_email("user@-example.com"),
            vec!["Invalid domain format"]
        );
    }

    #[test]
    fn test_domain_with_underscore_passes_pattern_but_not_domain_rule() {
        assert_eq!(
            validate_email("user@my_host.com"),
            vec!["Invalid domain format"]
        );
    }

    #[test]
    fn test_too_long() {
        let email = format!("{}@example.com", "a".repeat(250));
        let errors = validate_email(&email);
        assert_eq!(errors, vec!["Email is too long (maximum 254 characters)"]);
    }

    #[test]
    fn test_domain_too_long() {
        let domain = format!("{}.com", "a".repeat(250));
        let errors = validate_email(&format!("u@{domain}"));
        assert!(errors.contains(&"Domain part is too long".to_string()));
        assert!(errors.contains(&"Email is too long (maximum 254 characters)".to_string()));
    }

    /// `local@` followed by a domain of `domain_len` characters ending in `.com`
    fn address(local: &str, domain_len: usize) -> String {
        format!("{}@{}.com", local, "a".repeat(domain_len - 4))
    }

    #[rstest]
    #[case::at_limit(address("a", 252), true)]
    #[case::one_over(address("ab", 252), false)]
    fn test_length_boundary(#[case] email: String, #[case] accepted: bool) {
        let expected: Vec<String> = if accepted {
            vec![]
        } else {
            vec!["Email is too long (maximum 254 characters)".to_string()]
        };
        assert_eq!(email.chars().count(), if accepted { 254 } else { 255 });
        assert_eq!(validate_email(&email), expected);
    }

    #[rstest]
    #[case::at_limit(253, false)]
    #[case::one_over(254, true)]
    fn test_domain_length_boundary(#[case] domain_len: usize, #[case] too_long: bool) {
        let errors = validate_email(&address("a", domain_len));
        assert_eq!(errors.contains(&"Domain part is too long".to_string()), too_long);
        assert!(!errors.contains(&"Invalid domain format".to_string()));
    }

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("user@example.com"), Some("example.com"));
        assert_eq!(domain_of("user@"), Some(""));
        assert_eq!(domain_of("user"), None);
        assert_eq!(domain_of("a@b@c"), None);
    }

    #[test]
    fn test_deterministic() {
        let input = "someone@@bad_domain";
        assert_eq!(validate_email(input), validate_email(input));
    }
}
