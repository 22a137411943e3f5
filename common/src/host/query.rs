//! # Resolution Target Model
//!
//! Defines the input for one host identity resolution.
//!
//! An input string can be:
//! * A bare host name (e.g., `sql2016`).
//! * An IPv4/IPv6 literal.
//! * A name with a trailing instance qualifier (e.g., `sql2016\sqlexpress`).
//!
//! The qualifier is discarded before any lookup but preserved verbatim in
//! the final record's input name.

use std::str::FromStr;

use crate::error::ParseError;

/// A single target to be resolved. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostQuery {
    raw_input: String,
    host_part: String,
}

impl HostQuery {
    /// The original input string, qualifier included.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// The input with any trailing `\qualifier` removed.
    ///
    /// This is the only form ever handed to a network transport.
    pub fn host_part(&self) -> &str {
        &self.host_part
    }
}

impl FromStr for HostQuery {
    type Err = ParseError;

    /// Parses a string into a `HostQuery`.
    ///
    /// Splits on the first backslash: everything before it is the host part,
    /// everything after is an instance qualifier that lookups ignore.
    /// Whitespace-only input and input whose host part is empty (e.g.,
    /// `\sqlexpress`) are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let host_part: &str = match trimmed.split_once('\\') {
            Some((host, _qualifier)) => host,
            None => trimmed,
        };

        if host_part.trim().is_empty() {
            return Err(ParseError::MissingHostPart {
                input: trimmed.to_string(),
            });
        }

        Ok(Self {
            raw_input: trimmed.to_string(),
            host_part: host_part.trim().to_string(),
        })
    }
}

impl std::fmt::Display for HostQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw_input)
    }
}
