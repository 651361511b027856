use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global tracing subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Log lines go to stderr so that stdout stays reserved for command output
/// (the seeding CLI prints its report there).
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(log_layer(std::io::stderr))
        .try_init();
}

/// Formatting layer writing every event to `writer`.
pub fn log_layer<S, W>(
    writer: W,
) -> fmt::Layer<S, fmt::format::DefaultFields, fmt::format::Format, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fmt::layer().with_writer(writer)
}

/// Install the Prometheus recorder backing the `/metrics` route.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}
