//! Value types flowing through one resolution: reachability probe output,
//! raw strategy output, and the final normalized record.

/// Outcome of the single ICMP echo sent before identity lookup.
///
/// Produced once by the prober and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reachability {
    /// Responding address in dotted-quad form, when the echo came back.
    pub ip_address: Option<String>,
    pub reached: bool,
}

impl Reachability {
    pub fn reached(ip_address: String) -> Self {
        Self {
            ip_address: Some(ip_address),
            reached: true,
        }
    }

    /// The non-fatal "no answer" outcome. Resolution continues past it.
    pub fn unreached() -> Self {
        Self::default()
    }
}

/// Raw, unnormalized output of exactly one successful identity strategy.
///
/// All fields absent means "unknown identity" — the normal outcome when
/// every strategy in the chain failed, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityRecord {
    /// Short computer name.
    pub name: Option<String>,
    pub dns_host_name: Option<String>,
    pub domain: Option<String>,
}

impl IdentityRecord {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.dns_host_name.is_none() && self.domain.is_none()
    }
}

/// The canonical record produced for one input. Terminal value, never
/// mutated after return.
///
/// `fqdn` is derived, never independently set: it is present only when both
/// `dns_host_name` and `domain` are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHost {
    /// The original input, qualifier included, always present.
    pub input_name: String,
    pub computer_name: Option<String>,
    pub ip_address: Option<String>,
    pub dns_host_name: Option<String>,
    pub domain: Option<String>,
    pub fqdn: Option<String>,
}

impl ResolvedHost {
    /// A record carrying nothing but the input name, for resolutions that
    /// produced no data at all.
    pub fn unknown(input_name: impl Into<String>) -> Self {
        Self {
            input_name: input_name.into(),
            computer_name: None,
            ip_address: None,
            dns_host_name: None,
            domain: None,
            fqdn: None,
        }
    }
}
