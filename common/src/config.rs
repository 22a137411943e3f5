use std::time::Duration;

/// Per-run resolution settings, decided by the composition root.
#[derive(Debug, Clone)]
pub struct ResolveConfig {
    /// Whether instrumentation (CIM/WMI style) strategies may run at all.
    ///
    /// Supplied by the caller, never detected at run time. Restricted
    /// environments set this to `false` and the chain starts at DNS.
    pub instrumentation_available: bool,
    /// Upper bound applied to the probe and to each strategy attempt.
    pub timeout: Duration,
    /// Skips the ICMP probe entirely; the record's address stays absent.
    pub no_ping: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            instrumentation_available: false,
            timeout: Duration::from_secs(4),
            no_ping: false,
        }
    }
}
