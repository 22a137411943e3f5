//! Collaborator interfaces for the instrumentation (CIM/WMI style)
//! transports.
//!
//! The resolver consumes these traits; it never implements the wire
//! protocols itself. A session transport has an explicit open/query/close
//! lifecycle, an object transport answers a single query in one call. Both
//! return the same four-field computer-system shape, which each strategy
//! maps into an [`IdentityRecord`] at its own boundary.

use async_trait::async_trait;

use hostident_common::credential::Credential;
use hostident_common::error::StrategyError;
use hostident_common::host::IdentityRecord;

/// The four fields every instrumentation query asks for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputerSystemInfo {
    pub name: Option<String>,
    /// Some providers report the host name here instead of in `name`.
    pub caption: Option<String>,
    pub dns_host_name: Option<String>,
    pub domain: Option<String>,
}

impl From<ComputerSystemInfo> for IdentityRecord {
    fn from(info: ComputerSystemInfo) -> Self {
        IdentityRecord {
            name: info.name.or(info.caption),
            dns_host_name: info.dns_host_name,
            domain: info.domain,
        }
    }
}

/// Session-oriented remote-management transport (the primary one).
///
/// Opening may fail on connect or auth; the returned session is a scoped
/// acquisition the caller must close on every exit path.
#[async_trait]
pub trait SessionTransport: Send + Sync {
    /// Stable transport name for diagnostics ("wsman", ...).
    fn name(&self) -> &'static str;

    async fn open(
        &self,
        host_part: &str,
        credential: Option<&Credential>,
    ) -> Result<Box<dyn InstrumentationSession>, StrategyError>;
}

/// An open remote-management session.
#[async_trait]
pub trait InstrumentationSession: Send + Sync {
    async fn query_computer_system(&mut self) -> Result<ComputerSystemInfo, StrategyError>;

    /// Releases the session. Infallible: there is nothing useful a caller
    /// can do with a close failure beyond what the transport logs itself.
    async fn close(&mut self);
}

/// Object-model remote-management transport, one query per call and no
/// session to manage. Used both as the fallback and the legacy transport.
#[async_trait]
pub trait ObjectTransport: Send + Sync {
    fn name(&self) -> &'static str;

    async fn query_computer_system(
        &self,
        host_part: &str,
        credential: Option<&Credential>,
    ) -> Result<ComputerSystemInfo, StrategyError>;
}
