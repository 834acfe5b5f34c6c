//! Log output as GitHub Actions workflow commands.
//!
//! `warn` and `error` events become `::warning::` / `::error::` annotations,
//! `debug` and `trace` become `::debug::` lines (shown when step debug logging
//! is enabled), and `info` is printed as-is.

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "LABEL_TRACKER_LOG";

/// Install the global subscriber. Logs go to stderr; stdout carries command output.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(ActionsFormat)
        .try_init();
    // A subscriber may already be installed when embedded in another binary.
    if let Err(e) = installed {
        tracing::debug!("Keeping the existing tracing subscriber: {}", e);
    }
}

/// Event formatter producing workflow command lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionsFormat;

impl<S, N> FormatEvent<S, N> for ActionsFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut message = String::new();
        ctx.field_format().format_fields(Writer::new(&mut message), event)?;

        match *event.metadata().level() {
            Level::ERROR => writeln!(writer, "::error::{}", escape_data(&message)),
            Level::WARN => writeln!(writer, "::warning::{}", escape_data(&message)),
            Level::INFO => writeln!(writer, "{}", message),
            _ => writeln!(writer, "::debug::{}", escape_data(&message)),
        }
    }
}

/// Escape a workflow command payload the way the runner decodes it.
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
