// File: src/views.rs
// Purpose: Maud templates for the validation form and its results
//
// Every user-supplied value goes through maud's escaping; the only
// PreEscaped content is the static stylesheet and the bootstrap script.

use crate::assets;
use fieldcheck_validation::{
    format_national_id, generate_valid_eid, FieldKind, FormReport, FormSubmission,
    ValidatorConfig,
};
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Id of the form element, also used by the WASM bootstrap
pub const FORM_ID: &str = "validationForm";

const STYLES: &str = r#"
body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; background-color: #f5f5f5; }
.container { background-color: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
h1 { color: #333; text-align: center; margin-bottom: 30px; }
.form-group { margin-bottom: 20px; }
label { display: block; margin-bottom: 5px; font-weight: bold; color: #555; }
input[type="email"], input[type="text"], input[type="tel"] { width: 100%; padding: 12px; border: 2px solid #ddd; border-radius: 5px; font-size: 16px; box-sizing: border-box; }
input:focus { border-color: #4CAF50; outline: none; }
input.invalid { border-color: #f44336; }
input.valid { border-color: #4CAF50; }
button { background-color: #4CAF50; color: white; padding: 12px 24px; border: none; border-radius: 5px; cursor: pointer; font-size: 16px; width: 100%; }
button:hover { background-color: #45a049; }
.summary { margin: 20px 0; padding: 15px; border-radius: 5px; }
.summary.success { background-color: #e8f5e9; border: 1px solid #4CAF50; }
.summary.error { background-color: #ffebee; border: 1px solid #f44336; }
.validation-result { margin: 20px 0; padding: 15px; border-radius: 5px; border-left: 4px solid #ddd; }
.success { color: #4CAF50; font-weight: bold; }
.error { color: #f44336; font-size: 14px; margin-top: 5px; }
.error-list { margin: 10px 0; padding-left: 20px; }
.error-list li { color: #f44336; margin: 5px 0; }
.examples { background-color: #f9f9f9; padding: 15px; border-radius: 5px; margin-top: 20px; }
.examples h3 { margin-top: 0; color: #333; }
.examples p { margin: 5px 0; font-family: monospace; background-color: white; padding: 5px; border-radius: 3px; }
.note { color: #666; font-size: 14px; }
"#;

/// Full page: the form pre-filled with `submission`, plus results when `report` is set
pub fn page(
    config: &ValidatorConfig,
    submission: &FormSubmission,
    report: Option<&FormReport>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Input Validation - Email, Emirates ID, UAE Mobile" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                div.container {
                    h1 { "Input Validation" }
                    p { "Validate Email, Emirates ID, and UAE Mobile Numbers" }

                    @if let Some(report) = report {
                        (summary(submission, report))
                    }

                    (form(config, submission, report))

                    @if let Some(report) = report {
                        hr style="margin: 30px 0;";
                        h2 { "Validation Results" }
                        @for kind in FieldKind::ALL {
                            (field_result(kind, submission.value(kind), report.errors(kind)))
                        }
                    }

                    (examples(config))
                }
                (assets::bootstrap_script(FORM_ID))
            }
        }
    }
}

/// Overall outcome box shown above the form after a submission
fn summary(submission: &FormSubmission, report: &FormReport) -> Markup {
    html! {
        @if report.is_success() {
            div.summary.success {
                h3 { "Validation Successful!" }
                @for kind in FieldKind::ALL {
                    p { strong { (kind.label()) ":" } " " (submission.value(kind).trim()) }
                }
            }
        } @else {
            div.summary.error {
                h3 { "Validation Errors:" }
                ul {
                    @for error in report.all_errors() {
                        li { (error) }
                    }
                }
            }
        }
    }
}

/// The form, with values pre-filled and server errors in each field's error box
fn form(config: &ValidatorConfig, submission: &FormSubmission, report: Option<&FormReport>) -> Markup {
    let config_json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string());

    html! {
        form method="POST" action="/" id=(FORM_ID) data-validate=(config_json) {
            @for kind in FieldKind::ALL {
                @let errors = report.map(|r| r.errors(kind)).unwrap_or(&[]);
                @let state = report.map(|_| if errors.is_empty() { "valid" } else { "invalid" });
                div.form-group {
                    label for=(kind.name()) { (kind.label()) ":" }
                    input type=(kind.input_type()) id=(kind.name()) name=(kind.name())
                        value=(submission.value(kind)) placeholder=(kind.placeholder())
                        class=[state];
                    div.error id=(format!("{}Error", kind.name())) {
                        @for error in errors {
                            div { (error) }
                        }
                    }
                }
            }
            button type="submit" { "Validate Inputs" }
        }
    }
}

/// Per-field block echoing the input and listing its errors
fn field_result(kind: FieldKind, value: &str, errors: &[String]) -> Markup {
    html! {
        div.validation-result {
            h3 { (kind.label()) " Validation" }
            p { strong { "Input:" } " " (value) }
            @if errors.is_empty() {
                p.success { "✓ Valid " (kind.label()) }
            } @else {
                p.error { "✗ Validation Errors:" }
                ul.error-list {
                    @for error in errors {
                        li { (error) }
                    }
                }
            }
        }
    }
}

fn examples(config: &ValidatorConfig) -> Markup {
    let sample_ids: Vec<String> = [(2000, 1234567), (1995, 9876543)]
        .iter()
        .filter_map(|&(year, sequence)| generate_valid_eid(year, sequence).ok())
        .map(|eid| format_national_id(&eid))
        .collect();

    html! {
        div.examples {
            h3 { "Input Format Examples:" }
            p { strong { "Email:" } " user@example.com, john.doe@company.co.uk" }
            p { strong { "Emirates ID:" } " " (sample_ids.join(", ")) }
            p { strong { "UAE Mobile:" } " +971 50 123 4567, 971501234567, 0501234567" }

            h3 { "Note for Emirates ID Testing:" }
            p.note { (checksum_note(config)) }
        }
    }
}

fn checksum_note(config: &ValidatorConfig) -> String {
    let prefix = config
        .required_prefix
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!(" starting with {}", p))
        .unwrap_or_default();

    if config.checksum_enabled {
        format!(
            "Checksum validation is enabled: IDs{} must end with a valid check digit.",
            prefix
        )
    } else {
        format!(
            "Checksum validation is currently disabled. Any 15-digit number{} will be accepted.",
            prefix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcheck_validation::validate_form;

    #[test]
    fn test_empty_page_has_form_and_examples() {
        let html = page(&ValidatorConfig::default(), &FormSubmission::default(), None).into_string();
        assert!(html.contains(r#"id="validationForm""#));
        assert!(html.contains("data-validate="));
        assert!(html.contains(r#"id="emailError""#));
        assert!(html.contains(r#"id="eidError""#));
        assert!(html.contains(r#"id="mobileError""#));
        assert!(html.contains("784-2000-1234567-6"));
        assert!(!html.contains("Validation Results"));
        assert!(html.contains("Checksum validation is currently disabled"));
    }

    #[test]
    fn test_results_escape_user_input() {
        let submission = FormSubmission::new("<script>alert('x')</script>", "\"><b>", "abc");
        let report = validate_form(&submission, &ValidatorConfig::default());
        let html = page(&ValidatorConfig::default(), &submission, Some(&report)).into_string();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert"));
        assert!(!html.contains("\"><b>"));
        assert!(html.contains("Validation Errors:"));
    }

    #[test]
    fn test_field_result_success() {
        let html = field_result(FieldKind::Mobile, "0501234567", &[]).into_string();
        assert!(html.contains("✓ Valid UAE Mobile"));
        assert!(html.contains("0501234567"));
    }

    #[test]
    fn test_invalid_fields_are_marked() {
        let submission = FormSubmission::new("user@example.com", "123", "0501234567");
        let report = validate_form(&submission, &ValidatorConfig::default());
        let html = form(&ValidatorConfig::default(), &submission, Some(&report)).into_string();

        assert!(html.contains(r#"id="eid" name="eid" value="123" placeholder="784-2000-1234567-6" class="invalid""#));
        assert!(html.contains(r#"class="valid""#));
    }

    #[test]
    fn test_checksum_note_reflects_config() {
        assert!(checksum_note(&ValidatorConfig::strict()).contains("enabled"));
        let no_prefix = ValidatorConfig {
            required_prefix: None,
            ..ValidatorConfig::default()
        };
        assert_eq!(
            checksum_note(&no_prefix),
            "Checksum validation is currently disabled. Any 15-digit number will be accepted."
        );
    }
}
