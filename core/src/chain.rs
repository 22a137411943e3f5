//! Standard chain assembly.
//!
//! The composition root decides which transports exist; this module only
//! encodes their order: session-based instrumentation, then the fallback
//! object-model transport, then the legacy one, then DNS.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hostident_common::config::ResolveConfig;
use hostident_common::credential::Credential;
use hostident_common::error::StrategyError;
use hostident_common::host::IdentityRecord;
use hostident_common::resolve::IdentityStrategy;
use hostident_transports::dns::DnsStrategy;
use hostident_transports::instrumentation::{ObjectTransport, SessionTransport};

use crate::resolver::IdentityResolver;
use crate::strategy::{ObjectQueryStrategy, SessionStrategy};

/// The three instrumentation transports, in chain order.
pub struct InstrumentationTransports {
    pub session: Arc<dyn SessionTransport>,
    pub fallback: Arc<dyn ObjectTransport>,
    pub legacy: Arc<dyn ObjectTransport>,
}

/// Builds the strategy chain for one run.
///
/// Instrumentation strategies enter the chain only when the capability flag
/// says so *and* the composition root supplied transports; the DNS fallback
/// is always last. The flag is an input, never detected here.
pub fn standard_chain(
    config: &ResolveConfig,
    instrumentation: Option<InstrumentationTransports>,
    dns: DnsStrategy,
) -> IdentityResolver {
    let mut strategies: Vec<Box<dyn IdentityStrategy>> = Vec::new();

    if config.instrumentation_available
        && let Some(transports) = instrumentation
    {
        strategies.push(Box::new(SessionStrategy::new(
            transports.session,
            config.timeout,
        )));
        strategies.push(Box::new(ObjectQueryStrategy::new(
            transports.fallback,
            config.timeout,
        )));
        strategies.push(Box::new(ObjectQueryStrategy::new(
            transports.legacy,
            config.timeout,
        )));
    }

    strategies.push(Box::new(dns_with_timeout(dns, config.timeout)));

    IdentityResolver::new(strategies)
}

/// Bounds the DNS strategy with the configured timeout, like every other
/// link of the chain.
pub fn dns_with_timeout(dns: DnsStrategy, timeout: Duration) -> BoundedStrategy<DnsStrategy> {
    BoundedStrategy { inner: dns, timeout }
}

/// Wraps a strategy so a hang in its transport surfaces as a timeout
/// failure instead of stalling the chain.
pub struct BoundedStrategy<S> {
    inner: S,
    timeout: Duration,
}

#[async_trait]
impl<S: IdentityStrategy> IdentityStrategy for BoundedStrategy<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn query(
        &self,
        host_part: &str,
        credential: Option<&Credential>,
    ) -> Result<IdentityRecord, StrategyError> {
        tokio::time::timeout(self.timeout, self.inner.query(host_part, credential))
            .await
            .map_err(|_| {
                StrategyError::timeout(format!(
                    "'{}' strategy timed out for {host_part}",
                    self.inner.name()
                ))
            })?
    }
}
