mod commands;
mod terminal;

use std::sync::Arc;
use std::time::Duration;

use commands::CommandLine;
use hostident_common::config::ResolveConfig;
use hostident_common::credential::Credential;
use hostident_common::host::{HostQuery, ResolvedHost};
use hostident_common::resolve::ReachabilityProbe;
use hostident_core::chain;
use hostident_core::Resolver;
use hostident_transports::dns::DnsStrategy;
use hostident_transports::ping::{IcmpProber, NoopProber};
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init(commands.verbose);

    let config = ResolveConfig {
        instrumentation_available: commands.instrumentation,
        timeout: Duration::from_secs(commands.timeout),
        no_ping: commands.no_ping,
    };

    if config.instrumentation_available {
        // This build ships no CIM/WMI transport; the chain degrades to DNS.
        warn!("no instrumentation transport available in this build, using DNS only");
    }

    let credential: Option<Credential> = commands.credential()?;
    let resolver = build_resolver(&config);

    let records: Vec<ResolvedHost> = resolve_concurrently(
        Arc::new(resolver),
        commands.targets.clone(),
        credential,
    )
    .await;

    for (idx, record) in records.iter().enumerate() {
        if commands.quiet {
            terminal::print::record_line(record);
        } else {
            terminal::print::record_tree(idx, record);
        }
    }

    Ok(())
}

fn build_resolver(config: &ResolveConfig) -> Resolver {
    let prober: Box<dyn ReachabilityProbe> = if config.no_ping {
        Box::new(NoopProber)
    } else {
        Box::new(IcmpProber::new(config.timeout))
    };

    let identity = chain::standard_chain(config, None, DnsStrategy::from_system());
    Resolver::new(prober, identity)
}

/// Fans resolutions out over tasks and restores input order by index.
///
/// Resolutions hold no shared state, so the only coordination needed is
/// putting the answers back in the right slots. One record per input is
/// the contract: a task that fails to join leaves a record with only the
/// input name set, never a shortened list.
async fn resolve_concurrently(
    resolver: Arc<Resolver>,
    targets: Vec<HostQuery>,
    credential: Option<Credential>,
) -> Vec<ResolvedHost> {
    let inputs: Vec<String> = targets
        .iter()
        .map(|query| query.raw_input().to_string())
        .collect();

    let mut handles = Vec::with_capacity(targets.len());
    for (idx, query) in targets.into_iter().enumerate() {
        let resolver = resolver.clone();
        let credential = credential.clone();
        handles.push(tokio::spawn(async move {
            (idx, resolver.resolve(&query, credential.as_ref()).await)
        }));
    }

    let mut slots: Vec<Option<ResolvedHost>> = (0..inputs.len()).map(|_| None).collect();
    for handle in handles {
        if let Ok((idx, record)) = handle.await {
            slots[idx] = Some(record);
        }
    }

    slots
        .into_iter()
        .zip(inputs)
        .map(|(slot, input_name)| slot.unwrap_or_else(|| ResolvedHost::unknown(input_name)))
        .collect()
}
