use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Symbol-per-level event formatter for terminal output.
pub struct HostidentFormatter;

impl<S, N> FormatEvent<S, N> for HostidentFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", level_symbol(*event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_symbol(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "[.]".dimmed(),
        Level::DEBUG => "[?]".cyan(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[!]".yellow().bold(),
        Level::ERROR => "[x]".red().bold(),
    }
}

/// Installs the subscriber. Verbosity: warn by default, debug at -v,
/// trace at -vv; `RUST_LOG` overrides everything.
pub fn init(verbosity: u8) {
    let default_level: &str = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(HostidentFormatter)
        .init();
}
