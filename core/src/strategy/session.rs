use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use hostident_common::credential::Credential;
use hostident_common::error::StrategyError;
use hostident_common::host::IdentityRecord;
use hostident_common::resolve::IdentityStrategy;
use hostident_transports::instrumentation::SessionTransport;

/// The primary instrumentation strategy: open a remote-management session,
/// query the computer-system fields, close the session.
///
/// The session is a scoped acquisition. It is closed on every exit path —
/// success, query failure, and query timeout — before the result is handed
/// back to the chain. The time bound is enforced here rather than around
/// the whole strategy so the close still runs when the query hangs.
pub struct SessionStrategy {
    transport: Arc<dyn SessionTransport>,
    timeout: Duration,
}

impl SessionStrategy {
    pub fn new(transport: Arc<dyn SessionTransport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }
}

#[async_trait]
impl IdentityStrategy for SessionStrategy {
    fn name(&self) -> &'static str {
        self.transport.name()
    }

    async fn query(
        &self,
        host_part: &str,
        credential: Option<&Credential>,
    ) -> Result<IdentityRecord, StrategyError> {
        // A timed-out open never returned a session, so there is nothing
        // to release on this path.
        let mut session = timeout(self.timeout, self.transport.open(host_part, credential))
            .await
            .map_err(|_| {
                StrategyError::timeout(format!("session open to {host_part} timed out"))
            })??;

        let outcome = timeout(self.timeout, session.query_computer_system()).await;
        session.close().await;

        match outcome {
            Ok(Ok(info)) => Ok(info.into()),
            Ok(Err(err)) => Err(err),
            Err(_elapsed) => Err(StrategyError::timeout(format!(
                "computer-system query on {host_part} timed out"
            ))),
        }
    }
}
