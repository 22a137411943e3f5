pub mod query;
pub mod record;

pub use query::HostQuery;
pub use record::{IdentityRecord, Reachability, ResolvedHost};
