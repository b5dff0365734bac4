//! fieldcheck validation core
//!
//! Pure validators for the three fields of the contact form: email address,
//! Emirates ID and UAE mobile number. Used by both the server-side handler and
//! the WASM client-side validation, so both ends apply the same rules.
//!
//! Every validator returns the list of violated rules as human-readable
//! messages, in detection order. An empty list means the value is valid.

pub mod config;
pub mod dns;
pub mod email;
pub mod form;
pub mod mobile;
pub mod national_id;

// Re-export all validators
pub use config::ValidatorConfig;
pub use dns::{check_email_domain, DomainResolver, NoopResolver};
pub use email::validate_email;
pub use form::{validate, validate_form, FieldKind, FormReport, FormSubmission};
pub use mobile::{normalize_mobile, validate_mobile};
pub use national_id::{
    check_digit, format_national_id, generate_valid_eid, generate_with_prefix,
    has_valid_checksum, validate_national_id,
};
