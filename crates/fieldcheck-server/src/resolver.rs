// File: src/resolver.rs
// Purpose: DNS resolver behind the DomainResolver seam

use anyhow::{Context, Result};
use async_trait::async_trait;
use fieldcheck_validation::DomainResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;
use std::time::Duration;
use tracing::debug;

/// Resolves email domains: MX first, then A/AAAA
///
/// Only an authoritative "no such name" or an empty answer counts as a missing
/// domain. Timeouts, unreachable nameservers and server failures come back as
/// `Err`, which the domain check logs and skips.
#[derive(Clone)]
pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    /// Uses the host's resolver configuration (`/etc/resolv.conf` on Unix)
    pub fn from_system_conf(timeout: Duration) -> Result<Self> {
        let (config, opts) = hickory_resolver::system_conf::read_system_conf()
            .context("Failed to read system resolver configuration")?;
        Ok(Self::with_config(config, opts, timeout))
    }

    pub fn with_config(config: ResolverConfig, mut opts: ResolverOpts, timeout: Duration) -> Self {
        opts.timeout = timeout;
        opts.attempts = 1;
        Self {
            inner: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

/// NXDOMAIN, or NOERROR with an empty answer section
fn is_definite_absence(error: &ResolveError) -> bool {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            matches!(*response_code, ResponseCode::NXDomain | ResponseCode::NoError)
        }
        _ => false,
    }
}

/// Maps a finished lookup to the `DomainResolver` contract
fn interpret(domain: &str, record: &str, outcome: Result<bool, ResolveError>) -> Result<bool> {
    match outcome {
        Ok(found) => Ok(found),
        Err(e) if is_definite_absence(&e) => {
            debug!(domain, record, error = %e, "no records");
            Ok(false)
        }
        Err(e) => Err(e).with_context(|| format!("{} lookup of {} failed", record, domain)),
    }
}

#[async_trait]
impl DomainResolver for SystemResolver {
    async fn has_records(&self, domain: &str) -> Result<bool> {
        let mx = self
            .inner
            .mx_lookup(domain)
            .await
            .map(|lookup| lookup.iter().next().is_some());
        if interpret(domain, "MX", mx)? {
            return Ok(true);
        }

        let ip = self
            .inner
            .lookup_ip(domain)
            .await
            .map(|lookup| lookup.iter().next().is_some());
        interpret(domain, "A/AAAA", ip)
    }

    fn name(&self) -> &'static str {
        "hickory"
    }
}
