//! Tracing subscriber setup.

use super::exporter::create_tracer_provider;
use super::rotating_file::RotationPolicy;
use crate::{infrastructure, Config, DEFAULT_TRACE_LEVEL};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "AtomicBlog";

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level`, feeding an OpenTelemetry layer that exports to
/// [`infrastructure::trace_file`].
///
/// Tracing is optional: if the data directory cannot be created the plugin
/// runs without it. Only the first call installs a subscriber.
///
/// # Example
///
/// ```no_run
/// use atomic_blog::observability::init_tracing;
/// use atomic_blog::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(infrastructure::get_data_dir()).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(config.trace_directive())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = create_tracer_provider(
        infrastructure::trace_file(),
        RotationPolicy::default(),
        resource,
        SERVICE_NAME,
    );
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
