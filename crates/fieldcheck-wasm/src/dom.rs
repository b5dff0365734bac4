//! Browser wiring: live validation on `input`, the submit gate and Emirates ID masking
//!
//! Expected markup, as rendered by the server:
//! an `<input id="email|eid|mobile">` per field, a `<div id="<field>Error">`
//! beside each, and the validator config as JSON in the form's
//! `data-validate` attribute.

use crate::validation::{self, format_national_id, FieldKind, FormSubmission, ValidatorConfig};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event, HtmlFormElement, HtmlInputElement};

/// Form attribute carrying the validator configuration
pub const CONFIG_ATTRIBUTE: &str = "data-validate";

const SUBMIT_BLOCKED_MESSAGE: &str = "Please fix all validation errors before submitting the form.";

/// Attach live validation to a server-rendered form
///
/// # Example (JavaScript)
/// ```javascript
/// import init, { attachLiveValidation } from '/pkg/fieldcheck_wasm.js';
/// await init();
/// attachLiveValidation('validationForm');
/// ```
#[wasm_bindgen(js_name = attachLiveValidation)]
pub fn attach_live_validation(form_id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let form = document
        .get_element_by_id(form_id)
        .ok_or_else(|| JsValue::from_str(&format!("No form with id '{}'", form_id)))?
        .dyn_into::<HtmlFormElement>()
        .map_err(JsValue::from)?;

    let config = Rc::new(read_config(&form)?);

    for kind in FieldKind::ALL {
        let input = input_for(&document, kind)?;
        let config = Rc::clone(&config);
        let doc = document.clone();

        let on_input = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };

            if kind == FieldKind::NationalId {
                input.set_value(&format_national_id(&input.value()));
            }

            let errors = validation::validate(kind, &input.value(), &config);
            if let Err(e) = show_errors(&doc, kind, &errors) {
                console::error_1(&e);
            }
        });

        input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
    }

    let doc = document.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let outcome = gate_submit(check_form(&doc, &config), || {
            event.prevent_default();
            match web_sys::window() {
                Some(window) => window.alert_with_message(SUBMIT_BLOCKED_MESSAGE),
                None => Ok(()),
            }
        });
        if let Err(e) = outcome {
            console::error_1(&e);
        }
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}

fn read_config(form: &HtmlFormElement) -> Result<ValidatorConfig, JsValue> {
    match form.get_attribute(CONFIG_ATTRIBUTE) {
        Some(json) if !json.trim().is_empty() => serde_json::from_str(&json)
            .map_err(|e| JsValue::from_str(&format!("Invalid {} attribute: {}", CONFIG_ATTRIBUTE, e))),
        _ => Ok(ValidatorConfig::default()),
    }
}

fn input_for(document: &Document, kind: FieldKind) -> Result<HtmlInputElement, JsValue> {
    document
        .get_element_by_id(kind.name())
        .ok_or_else(|| JsValue::from_str(&format!("No input with id '{}'", kind.name())))?
        .dyn_into::<HtmlInputElement>()
        .map_err(JsValue::from)
}

/// Validate every field, render the errors, and report whether the form may be submitted
fn check_form(document: &Document, config: &ValidatorConfig) -> Result<bool, JsValue> {
    let submission = FormSubmission::new(
        input_for(document, FieldKind::Email)?.value(),
        input_for(document, FieldKind::NationalId)?.value(),
        input_for(document, FieldKind::Mobile)?.value(),
    );

    let report = validation::validate_form(&submission, config);
    for kind in FieldKind::ALL {
        show_errors(document, kind, report.errors(kind))?;
    }

    Ok(report.is_success())
}

/// Runs `block` when the form has errors; a failed check or a failed block is `Err`
fn gate_submit(
    check: Result<bool, JsValue>,
    block: impl FnOnce() -> Result<(), JsValue>,
) -> Result<(), JsValue> {
    if check? {
        Ok(())
    } else {
        block()
    }
}

fn show_errors(document: &Document, kind: FieldKind, errors: &[String]) -> Result<(), JsValue> {
    let input = input_for(document, kind)?;
    let error_id = format!("{}Error", kind.name());
    let error_box = document
        .get_element_by_id(&error_id)
        .ok_or_else(|| JsValue::from_str(&format!("No error container with id '{}'", error_id)))?;

    // Text nodes only, messages never become markup
    error_box.set_text_content(None);
    for message in errors {
        let line = document.create_element("div")?;
        line.set_text_content(Some(message.as_str()));
        error_box.append_child(&line)?;
    }

    let classes = input.class_list();
    if errors.is_empty() {
        classes.remove_1("invalid")?;
        classes.add_1("valid")?;
    } else {
        classes.add_1("invalid")?;
        classes.remove_1("valid")?;
    }

    Ok(())
}
