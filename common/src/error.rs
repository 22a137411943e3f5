//! Error taxonomy of the resolution pipeline.
//!
//! Only [`ParseError`] is ever visible to a caller. Strategy and transport
//! failures are logged at the adapter boundary and converted into fallback
//! or absent fields, never raised past the resolver.

use thiserror::Error;

/// Input validation failure. The single caller-visible error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    EmptyInput,
    #[error("input '{input}' has no host part before the qualifier")]
    MissingHostPart { input: String },
}

/// Why one identity strategy failed. Used for logging and for choosing
/// nothing — every kind advances the chain the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection refused, session could not be established.
    Connect,
    /// Remote side rejected the supplied credential.
    Auth,
    /// The strategy did not answer within the configured bound.
    Timeout,
    /// Name does not exist (DNS NXDOMAIN, no records).
    NotFound,
    /// Malformed or unexpected response.
    Protocol,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = match self {
            FailureKind::Connect => "connect",
            FailureKind::Auth => "auth",
            FailureKind::Timeout => "timeout",
            FailureKind::NotFound => "not-found",
            FailureKind::Protocol => "protocol",
        };
        f.write_str(label)
    }
}

/// Failure of a single strategy attempt. Carries a reason for the log line
/// and nothing else; it never crosses the resolver boundary.
#[derive(Debug, Error, Clone)]
#[error("{kind}: {message}")]
pub struct StrategyError {
    pub kind: FailureKind,
    pub message: String,
}

impl StrategyError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Timeout, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(FailureKind::NotFound, message)
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Connect, message)
    }
}
