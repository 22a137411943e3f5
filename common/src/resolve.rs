//! The central **abstractions** for host identity resolution.
//!
//! High-level modules depend on these traits rather than on concrete
//! transports, so the resolver can be wired with real ICMP/DNS adapters in
//! the binary and with fixed mappings in tests.

use async_trait::async_trait;

use crate::credential::Credential;
use crate::error::StrategyError;
use crate::host::{IdentityRecord, Reachability};

/// One echo probe against a host part.
///
/// Infallible by contract: transport failures of any kind map to
/// [`Reachability::unreached`], never to an error.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn probe(&self, host_part: &str) -> Reachability;
}

/// One concrete way of asking a host who it is.
///
/// A strategy is attempted exactly once per resolution; failure carries a
/// reason for the log line and advances the chain, nothing more.
#[async_trait]
pub trait IdentityStrategy: Send + Sync {
    /// Stable name used in diagnostics ("wsman-session", "dns", ...).
    fn name(&self) -> &'static str;

    async fn query(
        &self,
        host_part: &str,
        credential: Option<&Credential>,
    ) -> Result<IdentityRecord, StrategyError>;
}
