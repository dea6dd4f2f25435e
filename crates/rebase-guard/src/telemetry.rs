//! Tracing initialisation for the rebase-guard binary.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global tracing subscriber.
///
/// * `json` - emit newline-delimited JSON log lines; CI log collectors
///   parse these alongside the JSON verdict.
/// * `level` - default verbosity when `RUST_LOG` is not set. Predicate
///   commands and raw outcomes are logged at DEBUG, verdict-relevant
///   events at INFO.
///
/// Safe to call more than once; only the first call takes effect (the
/// global subscriber can only be set once per process).
pub fn init(json: bool, level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));

    let registry = tracing_subscriber::registry().with(filter);
    let fmt_layer = fmt::layer().with_target(false);

    if json {
        registry.with(fmt_layer.json()).try_init().ok();
    } else {
        registry.with(fmt_layer).try_init().ok();
    }
}
