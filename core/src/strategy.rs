//! Strategies wrapping the instrumentation collaborator transports.
//!
//! The DNS strategy lives with its transport in `hostident-transports`;
//! these two exist here because they carry chain semantics of their own:
//! the session lifecycle and the per-attempt time bound.

mod object;
mod session;

pub use object::ObjectQueryStrategy;
pub use session::SessionStrategy;
