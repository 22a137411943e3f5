use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use hostident_common::credential::Credential;
use hostident_common::error::StrategyError;
use hostident_common::host::IdentityRecord;
use hostident_common::resolve::IdentityStrategy;
use hostident_transports::instrumentation::ObjectTransport;

/// Object-model instrumentation strategy: one query, no session lifecycle.
///
/// Used twice in the standard chain, once over the fallback transport and
/// once over the legacy one.
pub struct ObjectQueryStrategy {
    transport: Arc<dyn ObjectTransport>,
    timeout: Duration,
}

impl ObjectQueryStrategy {
    pub fn new(transport: Arc<dyn ObjectTransport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }
}

#[async_trait]
impl IdentityStrategy for ObjectQueryStrategy {
    fn name(&self) -> &'static str {
        self.transport.name()
    }

    async fn query(
        &self,
        host_part: &str,
        credential: Option<&Credential>,
    ) -> Result<IdentityRecord, StrategyError> {
        let info = timeout(
            self.timeout,
            self.transport.query_computer_system(host_part, credential),
        )
        .await
        .map_err(|_| {
            StrategyError::timeout(format!("object query on {host_part} timed out"))
        })??;

        Ok(info.into())
    }
}
