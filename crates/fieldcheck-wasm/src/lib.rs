//! fieldcheck WASM
//!
//! WebAssembly bindings for the fieldcheck validators.
//! Provides real-time client-side validation using the same logic as server-side.

mod dom;

pub use dom::attach_live_validation;

use fieldcheck_validation as validation;
use serde::Serialize;
use validation::{FieldKind, FormSubmission, ValidatorConfig};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of `validateForm` as seen by JavaScript
#[derive(Serialize, Debug)]
struct FormOutcome<'a> {
    email: &'a [String],
    eid: &'a [String],
    mobile: &'a [String],
    success: bool,
}

/// Parse a config object passed from JavaScript, `undefined`/`null` meaning defaults
fn parse_config(config: JsValue) -> Result<ValidatorConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(ValidatorConfig::default());
    }

    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

/// Validate a single field value
///
/// # Arguments
/// * `kind` - `"email"`, `"eid"` or `"mobile"`
/// * `value` - The raw input value
/// * `config` - Optional validator configuration object
///
/// # Returns
/// Array of error messages (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateField('mobile', '+971 59 123 4567', {
///     allowed_mobile_prefixes: ['50', '55']
/// });
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(kind: &str, value: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let kind: FieldKind = kind.parse().map_err(|e: String| JsValue::from_str(&e))?;
    let config = parse_config(config)?;

    let errors = validation::validate(kind, value, &config);
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Validate a whole submission (`{ email, eid, mobile }`)
///
/// Returns `{ email: [], eid: [], mobile: [], success: bool }`.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(submission: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let submission: FormSubmission = serde_wasm_bindgen::from_value(submission)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse submission: {}", e)))?;
    let config = parse_config(config)?;

    let report = validation::validate_form(&submission, &config);
    let outcome = FormOutcome {
        email: &report.email,
        eid: &report.eid,
        mobile: &report.mobile,
        success: report.is_success(),
    };
    Ok(serde_wasm_bindgen::to_value(&outcome)?)
}

/// Checksum-valid Emirates ID for a year and sequence
#[wasm_bindgen(js_name = generateValidEid)]
pub fn generate_valid_eid_js(year: u16, sequence: u32) -> Result<String, JsValue> {
    validation::generate_valid_eid(year, sequence).map_err(|e| JsValue::from_str(&e))
}

/// Re-group a partially typed Emirates ID as `XXX-YYYY-XXXXXXX-X`
#[wasm_bindgen(js_name = formatNationalId)]
pub fn format_national_id_js(raw: &str) -> String {
    validation::format_national_id(raw)
}

/// Canonical 9-digit mobile number, or `undefined`
#[wasm_bindgen(js_name = normalizeMobile)]
pub fn normalize_mobile_js(raw: &str, config: JsValue) -> Result<Option<String>, JsValue> {
    let config = parse_config(config)?;
    Ok(validation::normalize_mobile(raw, &config))
}

/// Quick email check
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validation::validate_email(email).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(!is_valid_email_js("invalid-email"));
    }

    #[wasm_bindgen_test]
    fn test_validate_field_defaults() {
        let errors = validate_field("mobile", "0591234567", JsValue::UNDEFINED).unwrap();
        let errors: Vec<String> = serde_wasm_bindgen::from_value(errors).unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("prefix"));
    }

    #[wasm_bindgen_test]
    fn test_validate_field_unknown_kind() {
        assert!(validate_field("phone", "123", JsValue::NULL).is_err());
    }

    #[wasm_bindgen_test]
    fn test_generate_and_format() {
        let eid = generate_valid_eid_js(2000, 1234567).unwrap();
        assert_eq!(eid, "784200012345676");
        assert_eq!(format_national_id_js(&eid), "784-2000-1234567-6");
        assert!(generate_valid_eid_js(2000, 10_000_000).is_err());
    }

    #[wasm_bindgen_test]
    fn test_normalize_mobile() {
        assert_eq!(
            normalize_mobile_js("00971 50 123 4567", JsValue::UNDEFINED).unwrap(),
            Some("501234567".to_string())
        );
        assert_eq!(normalize_mobile_js("12", JsValue::UNDEFINED).unwrap(), None);
    }
}
