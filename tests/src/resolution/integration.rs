#![cfg(test)]
//! End-to-end resolution over mocked transports: the full chain order,
//! the capability gate, and the output record shape.

use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use hostident_common::config::ResolveConfig;
use hostident_common::credential::Credential;
use hostident_common::error::{FailureKind, StrategyError};
use hostident_common::host::{HostQuery, IdentityRecord, Reachability, ResolvedHost};
use hostident_common::resolve::{IdentityStrategy, ReachabilityProbe};
use hostident_core::Resolver;
use hostident_core::chain::{self, InstrumentationTransports};
use hostident_core::resolver::IdentityResolver;
use hostident_transports::dns::DnsStrategy;
use hostident_transports::instrumentation::{
    ComputerSystemInfo, InstrumentationSession, ObjectTransport, SessionTransport,
};

// ---------------------------------------------------------------------------
// Mock transports
// ---------------------------------------------------------------------------

struct FixedProber {
    answer: Option<&'static str>,
}

#[async_trait]
impl ReachabilityProbe for FixedProber {
    async fn probe(&self, _host_part: &str) -> Reachability {
        match self.answer {
            Some(ip) => Reachability::reached(ip.to_string()),
            None => Reachability::unreached(),
        }
    }
}

struct MockSessionTransport {
    answer: Option<ComputerSystemInfo>,
    opens: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
}

impl MockSessionTransport {
    fn answering(info: ComputerSystemInfo) -> Arc<Self> {
        Arc::new(Self {
            answer: Some(info),
            opens: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
        })
    }

    fn refusing() -> Arc<Self> {
        Arc::new(Self {
            answer: None,
            opens: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
        })
    }
}

struct MockSession {
    answer: ComputerSystemInfo,
    closes: Arc<AtomicUsize>,
}

#[async_trait]
impl InstrumentationSession for MockSession {
    async fn query_computer_system(&mut self) -> Result<ComputerSystemInfo, StrategyError> {
        Ok(self.answer.clone())
    }

    async fn close(&mut self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl SessionTransport for MockSessionTransport {
    fn name(&self) -> &'static str {
        "mock-session"
    }

    async fn open(
        &self,
        _host_part: &str,
        _credential: Option<&Credential>,
    ) -> Result<Box<dyn InstrumentationSession>, StrategyError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Some(info) => Ok(Box::new(MockSession {
                answer: info.clone(),
                closes: self.closes.clone(),
            })),
            None => Err(StrategyError::connect("connection refused")),
        }
    }
}

struct MockObjectTransport {
    label: &'static str,
    answer: Option<ComputerSystemInfo>,
    calls: Arc<AtomicUsize>,
}

impl MockObjectTransport {
    fn failing(label: &'static str) -> Arc<Self> {
        Arc::new(Self {
            label,
            answer: None,
            calls: Arc::new(AtomicUsize::new(0)),
        })
    }
}

#[async_trait]
impl ObjectTransport for MockObjectTransport {
    fn name(&self) -> &'static str {
        self.label
    }

    async fn query_computer_system(
        &self,
        _host_part: &str,
        _credential: Option<&Credential>,
    ) -> Result<ComputerSystemInfo, StrategyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Some(info) => Ok(info.clone()),
            None => Err(StrategyError::new(FailureKind::Connect, "unavailable")),
        }
    }
}

/// Stands in for the DNS fallback with a fixed forward mapping.
struct FixedDns {
    dns_host_name: &'static str,
    domain: &'static str,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl IdentityStrategy for FixedDns {
    fn name(&self) -> &'static str {
        "fixed-dns"
    }

    async fn query(
        &self,
        host_part: &str,
        _credential: Option<&Credential>,
    ) -> Result<IdentityRecord, StrategyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(IdentityRecord {
            name: Some(host_part.to_string()),
            dns_host_name: Some(self.dns_host_name.to_string()),
            domain: Some(self.domain.to_string()),
        })
    }
}

fn sql2016_info() -> ComputerSystemInfo {
    ComputerSystemInfo {
        name: Some("SQL2016".to_string()),
        caption: None,
        dns_host_name: Some("sql2016".to_string()),
        domain: Some("corp.local".to_string()),
    }
}

fn query(s: &str) -> HostQuery {
    HostQuery::from_str(s).unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_scenario_primary_strategy_wins() {
    let session = MockSessionTransport::answering(sql2016_info());
    let fallback = MockObjectTransport::failing("fallback");
    let legacy = MockObjectTransport::failing("legacy");

    let config = ResolveConfig {
        instrumentation_available: true,
        timeout: Duration::from_secs(1),
        no_ping: false,
    };
    let identity = chain::standard_chain(
        &config,
        Some(InstrumentationTransports {
            session: session.clone(),
            fallback: fallback.clone(),
            legacy: legacy.clone(),
        }),
        DnsStrategy::from_system(),
    );
    let resolver = Resolver::new(Box::new(FixedProber { answer: Some("10.0.0.5") }), identity);

    let record: ResolvedHost = resolver.resolve(&query("sql2016\\sqlexpress"), None).await;

    assert_eq!(record.input_name, "sql2016\\sqlexpress");
    assert_eq!(record.computer_name.as_deref(), Some("SQL2016"));
    assert_eq!(record.ip_address.as_deref(), Some("10.0.0.5"));
    assert_eq!(record.dns_host_name.as_deref(), Some("sql2016"));
    assert_eq!(record.domain.as_deref(), Some("corp.local"));
    assert_eq!(record.fqdn.as_deref(), Some("sql2016.corp.local"));

    // First success wins: nothing further down the chain ran.
    assert_eq!(session.opens.load(Ordering::SeqCst), 1);
    assert_eq!(session.closes.load(Ordering::SeqCst), 1);
    assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    assert_eq!(legacy.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn dns_fallback_names_host_after_the_host_part() {
    let session = MockSessionTransport::refusing();
    let fallback = MockObjectTransport::failing("fallback");
    let legacy = MockObjectTransport::failing("legacy");
    let dns_calls = Arc::new(AtomicUsize::new(0));

    let identity = IdentityResolver::new(vec![
        Box::new(hostident_core::strategy::SessionStrategy::new(
            session.clone(),
            Duration::from_secs(1),
        )),
        Box::new(hostident_core::strategy::ObjectQueryStrategy::new(
            fallback.clone(),
            Duration::from_secs(1),
        )),
        Box::new(hostident_core::strategy::ObjectQueryStrategy::new(
            legacy.clone(),
            Duration::from_secs(1),
        )),
        Box::new(FixedDns {
            dns_host_name: "web01",
            domain: "corp.example.com",
            calls: dns_calls.clone(),
        }),
    ]);
    let resolver = Resolver::new(Box::new(FixedProber { answer: None }), identity);

    let record = resolver.resolve(&query("web01"), None).await;

    assert_eq!(record.computer_name.as_deref(), Some("web01"));
    assert_eq!(record.dns_host_name.as_deref(), Some("web01"));
    assert_eq!(record.domain.as_deref(), Some("corp.example.com"));
    assert_eq!(record.fqdn.as_deref(), Some("web01.corp.example.com"));
    assert!(record.ip_address.is_none());

    // Every instrumentation strategy was tried exactly once before DNS.
    assert_eq!(session.opens.load(Ordering::SeqCst), 1);
    assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
    assert_eq!(legacy.calls.load(Ordering::SeqCst), 1);
    assert_eq!(dns_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn capability_flag_skips_instrumentation_entirely() {
    let session = MockSessionTransport::answering(sql2016_info());
    let fallback = MockObjectTransport::failing("fallback");
    let legacy = MockObjectTransport::failing("legacy");

    let config = ResolveConfig {
        instrumentation_available: false,
        timeout: Duration::from_millis(500),
        no_ping: true,
    };
    let identity = chain::standard_chain(
        &config,
        Some(InstrumentationTransports {
            session: session.clone(),
            fallback: fallback.clone(),
            legacy: legacy.clone(),
        }),
        DnsStrategy::from_system(),
    );
    let resolver = Resolver::new(Box::new(FixedProber { answer: None }), identity);

    // The .invalid TLD can never resolve, so the DNS link fails too.
    let record = resolver
        .resolve(&query("hostident-gating-probe.invalid"), None)
        .await;

    assert_eq!(session.opens.load(Ordering::SeqCst), 0);
    assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    assert_eq!(legacy.calls.load(Ordering::SeqCst), 0);
    assert!(record.computer_name.is_none());
}

#[tokio::test]
async fn total_failure_still_returns_one_record() {
    let identity = IdentityResolver::new(vec![Box::new(
        hostident_core::strategy::ObjectQueryStrategy::new(
            MockObjectTransport::failing("legacy"),
            Duration::from_secs(1),
        ),
    )]);
    let resolver = Resolver::new(Box::new(FixedProber { answer: None }), identity);

    let record = resolver.resolve(&query("ghost\\inst"), None).await;

    assert_eq!(record.input_name, "ghost\\inst");
    assert!(record.computer_name.is_none());
    assert!(record.ip_address.is_none());
    assert!(record.dns_host_name.is_none());
    assert!(record.domain.is_none());
    assert!(record.fqdn.is_none());
}

#[tokio::test]
async fn resolve_all_preserves_order_and_isolates_failures() {
    let identity = IdentityResolver::new(vec![Box::new(FixedDns {
        dns_host_name: "answered",
        domain: "corp.local",
        calls: Arc::new(AtomicUsize::new(0)),
    })]);
    let resolver = Resolver::new(Box::new(FixedProber { answer: None }), identity);

    let targets = vec![query("alpha"), query("beta\\inst"), query("gamma")];
    let records = resolver.resolve_all(&targets, None).await;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].input_name, "alpha");
    assert_eq!(records[1].input_name, "beta\\inst");
    assert_eq!(records[2].input_name, "gamma");
    // Lookups used only the host part.
    assert_eq!(records[1].computer_name.as_deref(), Some("beta"));
}
