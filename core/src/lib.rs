//! # Host Identity Resolution Engine
//!
//! Implements the core "who is this host" use case: one reachability probe,
//! then an ordered chain of identity-lookup strategies with per-strategy
//! error isolation, then normalization of whatever came back into a single
//! canonical record.
//!
//! **Architectural note:**
//! The engine depends only on the probe/strategy abstractions from
//! `hostident-common`; concrete transports are injected by the composition
//! root. Resolutions hold no shared state, so callers may fan out over many
//! targets without coordination.

pub mod chain;
pub mod normalize;
pub mod resolver;
pub mod strategy;

use hostident_common::credential::Credential;
use hostident_common::host::{HostQuery, IdentityRecord, Reachability, ResolvedHost};
use hostident_common::resolve::ReachabilityProbe;

use crate::resolver::IdentityResolver;

/// The externally invokable facade: probe, identity chain, normalize.
pub struct Resolver {
    prober: Box<dyn ReachabilityProbe>,
    identity: IdentityResolver,
}

impl Resolver {
    pub fn new(prober: Box<dyn ReachabilityProbe>, identity: IdentityResolver) -> Self {
        Self { prober, identity }
    }

    /// Resolves one target end-to-end.
    ///
    /// Never fails for transport reasons: missing reachability or identity
    /// data produces absent fields in the record, not an error.
    pub async fn resolve(
        &self,
        query: &HostQuery,
        credential: Option<&Credential>,
    ) -> ResolvedHost {
        let reach: Reachability = self.prober.probe(query.host_part()).await;
        let identity: IdentityRecord = self
            .identity
            .resolve_identity(query.host_part(), credential)
            .await;
        normalize::normalize(query, reach, identity)
    }

    /// Resolves a sequence of targets, order-preserving.
    ///
    /// Each item is independent; one target's total failure never aborts
    /// the others.
    pub async fn resolve_all(
        &self,
        queries: &[HostQuery],
        credential: Option<&Credential>,
    ) -> Vec<ResolvedHost> {
        let mut records: Vec<ResolvedHost> = Vec::with_capacity(queries.len());
        for query in queries {
            records.push(self.resolve(query, credential).await);
        }
        records
    }
}
