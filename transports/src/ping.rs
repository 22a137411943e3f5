//! ICMP echo prober.
//!
//! Sends exactly one echo request per probe with a bounded timeout. Any
//! failure along the way (name resolution, unreachable, timeout) yields the
//! "unreached" outcome; the probe never reports an error to its caller.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use hostident_common::host::Reachability;
use hostident_common::resolve::ReachabilityProbe;

const ECHO_PAYLOAD: [u8; 32] = [0; 32];

pub struct IcmpProber {
    timeout: Duration,
}

impl IcmpProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Resolves the host part to an IPv4 address.
    ///
    /// The record's address field is dotted-quad by contract, so a target
    /// that only resolves to IPv6 counts as unprobeable here.
    async fn resolve_addr(&self, host_part: &str) -> Option<IpAddr> {
        // Port 0 is a placeholder; only the address side is used.
        let addrs = tokio::net::lookup_host((host_part, 0u16)).await.ok()?;
        addrs.map(|sock| sock.ip()).find(|addr| addr.is_ipv4())
    }
}

#[async_trait]
impl ReachabilityProbe for IcmpProber {
    async fn probe(&self, host_part: &str) -> Reachability {
        let Some(addr) = self.resolve_addr(host_part).await else {
            debug!("probe: could not resolve an address for {host_part}");
            return Reachability::unreached();
        };

        match tokio::time::timeout(self.timeout, surge_ping::ping(addr, &ECHO_PAYLOAD)).await {
            Ok(Ok((_packet, rtt))) => {
                debug!("probe: {host_part} answered from {addr} in {rtt:?}");
                Reachability::reached(addr.to_string())
            }
            Ok(Err(err)) => {
                debug!("probe: echo to {host_part} ({addr}) failed: {err}");
                Reachability::unreached()
            }
            Err(_elapsed) => {
                debug!("probe: echo to {host_part} ({addr}) timed out");
                Reachability::unreached()
            }
        }
    }
}

/// Probe used when pinging is disabled; always reports "unreached".
pub struct NoopProber;

#[async_trait]
impl ReachabilityProbe for NoopProber {
    async fn probe(&self, _host_part: &str) -> Reachability {
        Reachability::unreached()
    }
}
