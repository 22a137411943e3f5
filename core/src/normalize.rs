//! Reconciles prober output, strategy output, and the original input into
//! the canonical record.

use hostident_common::host::{HostQuery, IdentityRecord, Reachability, ResolvedHost};

/// Combines the three intermediate values into one [`ResolvedHost`].
///
/// Never fails: missing or partial identity data produces absent fields.
pub fn normalize(query: &HostQuery, reach: Reachability, id: IdentityRecord) -> ResolvedHost {
    let fqdn: Option<String> = compute_fqdn(id.dns_host_name.as_deref(), id.domain.as_deref());

    ResolvedHost {
        input_name: query.raw_input().to_string(),
        computer_name: id.name,
        ip_address: reach.ip_address,
        dns_host_name: id.dns_host_name,
        domain: id.domain,
        fqdn,
    }
}

/// Joins host name and domain into an FQDN, or nothing.
///
/// Both parts must be non-empty after trimming. This suppresses every
/// degenerate concatenation — `"."`, `".domain"`, and `"host."` can never
/// be produced, not just the both-empty case.
fn compute_fqdn(dns_host_name: Option<&str>, domain: Option<&str>) -> Option<String> {
    let host: &str = dns_host_name.map(str::trim).filter(|part| !part.is_empty())?;
    let domain: &str = domain.map(str::trim).filter(|part| !part.is_empty())?;
    Some(format!("{host}.{domain}"))
}
