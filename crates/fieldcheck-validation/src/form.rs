//! Form-level entry points shared by the server handler and the browser

use crate::config::ValidatorConfig;
use crate::email::validate_email;
use crate::mobile::validate_mobile;
use crate::national_id::validate_national_id;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three validated fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Email,
    #[serde(alias = "eid", alias = "national_id")]
    NationalId,
    Mobile,
}

impl FieldKind {
    /// All fields in form order
    pub const ALL: [FieldKind; 3] = [FieldKind::Email, FieldKind::NationalId, FieldKind::Mobile];

    /// Form field name, also used as the input element id
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::NationalId => "eid",
            FieldKind::Mobile => "mobile",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Email => "Email",
            FieldKind::NationalId => "Emirates ID",
            FieldKind::Mobile => "UAE Mobile",
        }
    }

    /// Example value shown in the empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldKind::Email => "example@domain.com",
            FieldKind::NationalId => "784-2000-1234567-6",
            FieldKind::Mobile => "+971 50 123 4567",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::NationalId => "text",
            FieldKind::Mobile => "tel",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(FieldKind::Email),
            "eid" | "nationalId" | "national_id" => Ok(FieldKind::NationalId),
            "mobile" => Ok(FieldKind::Mobile),
            other => Err(format!(
                "Unknown field '{}'. Use 'email', 'eid' or 'mobile'",
                other
            )),
        }
    }
}

/// Raw values of one form submission; missing fields are empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub eid: String,
    #[serde(default)]
    pub mobile: String,
}

impl FormSubmission {
    pub fn new(
        email: impl Into<String>,
        eid: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            eid: eid.into(),
            mobile: mobile.into(),
        }
    }

    /// Raw value of a field
    pub fn value(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Email => &self.email,
            FieldKind::NationalId => &self.eid,
            FieldKind::Mobile => &self.mobile,
        }
    }
}

/// Errors of one submission, per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    pub email: Vec<String>,
    pub eid: Vec<String>,
    pub mobile: Vec<String>,
}

impl FormReport {
    /// Errors of a field
    pub fn errors(&self, kind: FieldKind) -> &[String] {
        match kind {
            FieldKind::Email => &self.email,
            FieldKind::NationalId => &self.eid,
            FieldKind::Mobile => &self.mobile,
        }
    }

    pub fn errors_mut(&mut self, kind: FieldKind) -> &mut Vec<String> {
        match kind {
            FieldKind::Email => &mut self.email,
            FieldKind::NationalId => &mut self.eid,
            FieldKind::Mobile => &mut self.mobile,
        }
    }

    /// True when no field has errors
    pub fn is_success(&self) -> bool {
        FieldKind::ALL.iter().all(|kind| self.errors(*kind).is_empty())
    }

    /// Every error in form order
    pub fn all_errors(&self) -> Vec<&str> {
        FieldKind::ALL
            .iter()
            .flat_map(|kind| self.errors(*kind))
            .map(String::as_str)
            .collect()
    }
}

/// Validates one field value
///
/// Pure: the domain lookup is never performed here, whatever
/// `config.enable_dns_lookup` says.
pub fn validate(kind: FieldKind, raw: &str, config: &ValidatorConfig) -> Vec<String> {
    match kind {
        FieldKind::Email => validate_email(raw),
        FieldKind::NationalId => validate_national_id(raw, config),
        FieldKind::Mobile => validate_mobile(raw, config),
    }
}

/// Validates every field of a submission
pub fn validate_form(submission: &FormSubmission, config: &ValidatorConfig) -> FormReport {
    let mut report = FormReport::default();
    for kind in FieldKind::ALL {
        *report.errors_mut(kind) = validate(kind, submission.value(kind), config);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::national_id::generate_valid_eid;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(FieldKind::Email, "Email is required")]
    #[case(FieldKind::NationalId, "Emirates ID is required")]
    #[case(FieldKind::Mobile, "Mobile number is required")]
    fn test_empty_field_is_required(#[case] kind: FieldKind, #[case] message: &str) {
        assert_eq!(validate(kind, "", &ValidatorConfig::default()), vec![message]);
    }

    #[test]
    fn test_bad_submission_fails_every_field() {
        let submission = FormSubmission::new("bad-email", "123", "abc");
        let report = validate_form(&submission, &ValidatorConfig::default());

        assert!(!report.is_success());
        for kind in FieldKind::ALL {
            assert!(!report.errors(kind).is_empty(), "{kind} should have errors");
        }
        assert_eq!(
            report.all_errors(),
            vec![
                "Invalid email format",
                "Email must contain exactly one @ symbol",
                "Emirates ID must be exactly 15 digits",
                "Mobile number must be 9 digits after country code",
            ]
        );
    }

    #[test]
    fn test_good_submission_succeeds() {
        let eid = generate_valid_eid(1995, 9876543).unwrap();
        let submission = FormSubmission::new("user@example.com", eid, "+971 55 123 4567");
        let report = validate_form(&submission, &ValidatorConfig::strict());
        assert!(report.is_success());
        assert!(report.all_errors().is_empty());
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let submission: FormSubmission = serde_json::from_str(r#"{"email": "a@b.co"}"#).unwrap();
        assert_eq!(submission, FormSubmission::new("a@b.co", "", ""));

        let report = validate_form(&submission, &ValidatorConfig::default());
        assert!(report.email.is_empty());
        assert_eq!(report.eid, vec!["Emirates ID is required"]);
        assert_eq!(report.mobile, vec!["Mobile number is required"]);
    }

    #[rstest]
    #[case("email", FieldKind::Email)]
    #[case("eid", FieldKind::NationalId)]
    #[case("nationalId", FieldKind::NationalId)]
    #[case("national_id", FieldKind::NationalId)]
    #[case("mobile", FieldKind::Mobile)]
    fn test_field_kind_parse(#[case] name: &str, #[case] expected: FieldKind) {
        assert_eq!(name.parse::<FieldKind>().unwrap(), expected);
    }

    #[test]
    fn test_field_kind_unknown() {
        assert!("phone".parse::<FieldKind>().is_err());
    }

    #[test]
    fn test_field_kind_serde_aliases() {
        let kind: FieldKind = serde_json::from_str(r#""eid""#).unwrap();
        assert_eq!(kind, FieldKind::NationalId);
        assert_eq!(serde_json::to_string(&FieldKind::NationalId).unwrap(), r#""nationalId""#);
    }
}
