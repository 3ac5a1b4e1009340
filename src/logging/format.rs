//! JSON log lines: one JSON object per line (ndjson) for ingestion by the
//! hosting platform's log collector.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber writing to stdout; level from RUST_LOG or default.
    pub fn init(json: bool, default_level: &str) {
        Self::init_with_writer(json, default_level, std::io::stdout);
    }

    /// Same as [`StructuredLogger::init`] with a caller-chosen sink (the CLI
    /// logs to stderr so stdout stays the response body).
    pub fn init_with_writer<W>(json: bool, default_level: &str, writer: W)
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_events(FmtSpan::NONE)
                .with_writer(writer);
            tracing_subscriber::registry().with(filter).with(fmt).init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(writer))
                .init();
        }
    }
}
