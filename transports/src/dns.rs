//! Forward-DNS identity strategy, the last link of the fallback chain.
//!
//! Looks the host part up through the system resolver and derives the
//! identity fields from the canonical name: the short computer name is the
//! host part itself, the DNS host name is the leading label, and the domain
//! is whatever remains after stripping exactly one `"{label}."` prefix.

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::error::ResolveErrorKind;
use tracing::debug;

use hostident_common::credential::Credential;
use hostident_common::error::{FailureKind, StrategyError};
use hostident_common::host::IdentityRecord;
use hostident_common::resolve::IdentityStrategy;

pub struct DnsStrategy {
    resolver: TokioAsyncResolver,
}

impl DnsStrategy {
    /// Builds a strategy over the system resolver configuration, falling
    /// back to the library defaults when none can be read.
    pub fn from_system() -> Self {
        let resolver = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|err| {
            debug!("dns: system resolver config unavailable ({err}), using defaults");
            TokioAsyncResolver::tokio(Default::default(), Default::default())
        });
        Self { resolver }
    }

    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl IdentityStrategy for DnsStrategy {
    fn name(&self) -> &'static str {
        "dns"
    }

    async fn query(
        &self,
        host_part: &str,
        _credential: Option<&Credential>,
    ) -> Result<IdentityRecord, StrategyError> {
        // An address literal short-circuits the resolver with a synthetic
        // answer whose query name is the literal itself; splitting that
        // into labels would fabricate identity fields out of octets.
        if host_part.parse::<IpAddr>().is_ok() {
            return Err(StrategyError::not_found(format!(
                "{host_part} is an address literal, no forward entry to derive names from"
            )));
        }

        let lookup = self
            .resolver
            .lookup_ip(host_part)
            .await
            .map_err(map_resolve_error)?;

        // The query name carries any search-domain expansion the resolver
        // applied; trim the root dot before splitting.
        let fqdn: String = lookup.as_lookup().query().name().to_utf8();
        let fqdn: &str = fqdn.trim_end_matches('.');

        let (dns_host_name, domain) = split_canonical_name(fqdn);
        debug!("dns: {host_part} resolved as {fqdn}");

        Ok(IdentityRecord {
            name: Some(host_part.to_string()),
            dns_host_name: Some(dns_host_name.to_string()),
            domain: domain.map(str::to_string),
        })
    }
}

/// Splits a canonical name into its leading label and the remaining domain.
///
/// The domain is produced by stripping exactly one `"{label}."` occurrence
/// from the front, so `web01.corp.example.com` yields
/// `("web01", Some("corp.example.com"))` and a single-label name yields no
/// domain.
fn split_canonical_name(fqdn: &str) -> (&str, Option<&str>) {
    let label: &str = fqdn.split('.').next().unwrap_or(fqdn);
    let domain = fqdn
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix('.'))
        .filter(|rest| !rest.is_empty());
    (label, domain)
}

fn map_resolve_error(err: hickory_resolver::error::ResolveError) -> StrategyError {
    let kind: FailureKind = match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => FailureKind::NotFound,
        ResolveErrorKind::Timeout => FailureKind::Timeout,
        ResolveErrorKind::Io(_) | ResolveErrorKind::NoConnections => FailureKind::Connect,
        _ => FailureKind::Protocol,
    };
    StrategyError::new(kind, err.to_string())
}
