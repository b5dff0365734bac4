//! Validator configuration
//!
//! The same structure is read from `fieldcheck.toml` on the server and from the
//! form's `data-validate` JSON attribute in the browser, so both ends run with
//! identical toggles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Toggles and regional constants for the three validators
///
/// Unknown keys are rejected so a misspelt toggle fails loudly instead of
/// silently running with its default. JavaScript callers may use camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Verify the mod-11 check digit of Emirates IDs
    #[serde(default = "default_false", alias = "checksumEnabled")]
    pub checksum_enabled: bool,

    /// Issuing-authority prefix every Emirates ID must start with (`None` disables the check)
    #[serde(default = "default_required_prefix", alias = "requiredPrefix")]
    pub required_prefix: Option<String>,

    /// Two-digit mobile network codes accepted after normalization
    #[serde(default = "default_mobile_prefixes", alias = "allowedMobilePrefixes")]
    pub allowed_mobile_prefixes: BTreeSet<String>,

    /// Look up the email domain (server only)
    #[serde(default = "default_false", alias = "enableDnsLookup")]
    pub enable_dns_lookup: bool,

    /// Enforce the XXX-YYYY-XXXXXXX-X grouping when separators are typed
    #[serde(default = "default_true", alias = "groupingEnabled")]
    pub grouping_enabled: bool,

    /// Country calling code stripped from mobile numbers, without `+` or `00`
    #[serde(default = "default_country_code", alias = "countryCode")]
    pub country_code: String,
}

// Default values
fn default_required_prefix() -> Option<String> {
    Some("784".to_string())
}

fn default_mobile_prefixes() -> BTreeSet<String> {
    ["50", "51", "52", "54", "55", "56", "58"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_country_code() -> String {
    "971".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            checksum_enabled: false,
            required_prefix: default_required_prefix(),
            allowed_mobile_prefixes: default_mobile_prefixes(),
            enable_dns_lookup: false,
            grouping_enabled: true,
            country_code: default_country_code(),
        }
    }
}

impl ValidatorConfig {
    /// Default configuration with the Emirates ID checksum switched on
    pub fn strict() -> Self {
        Self {
            checksum_enabled: true,
            ..Self::default()
        }
    }

    /// Allowed prefixes joined for display, in ascending order
    pub fn prefix_list(&self) -> String {
        self.allowed_mobile_prefixes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
