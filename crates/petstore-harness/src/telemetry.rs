use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset. Passes the dispatcher's exchange summaries.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing for a harness run and bridge `log` records into it.
///
/// - `RUST_LOG` overrides [`DEFAULT_FILTER`] (e.g. "debug,petstore_harness=trace"
///   to also see request payloads and response bodies).
/// - Exchange logging from the dispatcher and scenario/step results arrive
///   through `LogTracer` and are printed inside their scenario and step spans.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let _ = LogTracer::init();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer().with_target(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
