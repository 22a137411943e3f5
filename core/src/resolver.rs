//! The ordered fallback chain over identity strategies.

use hostident_common::credential::Credential;
use hostident_common::host::IdentityRecord;
use hostident_common::resolve::IdentityStrategy;
use tracing::{debug, warn};

/// Runs strategies strictly in order, first success wins.
///
/// Every strategy failure is absorbed here: logged with the strategy name
/// and reason, then the chain advances. Each strategy is attempted exactly
/// once; there is no retry. When the whole chain fails the resolver returns
/// the all-absent record, which is a normal outcome, not an error.
pub struct IdentityResolver {
    strategies: Vec<Box<dyn IdentityStrategy>>,
}

impl IdentityResolver {
    pub fn new(strategies: Vec<Box<dyn IdentityStrategy>>) -> Self {
        Self { strategies }
    }

    pub async fn resolve_identity(
        &self,
        host_part: &str,
        credential: Option<&Credential>,
    ) -> IdentityRecord {
        for strategy in &self.strategies {
            match strategy.query(host_part, credential).await {
                Ok(record) => {
                    debug!(
                        "identity of {host_part} answered by '{}' strategy",
                        strategy.name()
                    );
                    return record;
                }
                Err(err) => {
                    warn!(
                        "strategy '{}' failed for {host_part} ({}): {}",
                        strategy.name(),
                        err.kind,
                        err.message
                    );
                }
            }
        }

        debug!("identity of {host_part} unknown, every strategy failed");
        IdentityRecord::default()
    }
}
