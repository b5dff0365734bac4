//! Optional email domain existence check
//!
//! Kept out of the pure validators: it needs the network, so it only runs on
//! the server and only when `enable_dns_lookup` is set. Lookup failures are
//! logged and skipped, never reported as validation errors.

use crate::email::domain_of;
use anyhow::Result;
use async_trait::async_trait;

/// Answers whether a domain has mail or address records
#[async_trait]
pub trait DomainResolver: Send + Sync {
    /// `Ok(false)` means the domain definitely has no records; transport failures are `Err`
    async fn has_records(&self, domain: &str) -> Result<bool>;

    /// Resolver name for logs
    fn name(&self) -> &'static str;
}

/// Resolver that accepts every domain without touching the network
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

#[async_trait]
impl DomainResolver for NoopResolver {
    async fn has_records(&self, _domain: &str) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

/// Runs the domain existence check for an email address
///
/// Returns the error message to append, if any. Addresses without exactly one
/// `@` are left to the format rules.
pub async fn check_email_domain(email: &str, resolver: &dyn DomainResolver) -> Option<String> {
    let domain = domain_of(email.trim())?;
    if domain.is_empty() {
        return None;
    }

    match resolver.has_records(domain).await {
        Ok(true) => None,
        Ok(false) => {
            tracing::debug!(domain, resolver = resolver.name(), "email domain has no records");
            Some("Email domain does not exist".to_string())
        }
        Err(e) => {
            tracing::warn!(
                domain,
                resolver = resolver.name(),
                error = %e,
                "email domain lookup failed, skipping check"
            );
            None
        }
    }
}
