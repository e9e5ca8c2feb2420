//! Telemetry initialization

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize console logging on stderr with an `info` default filter.
///
/// # Example
/// ```
/// use apo_telemetry::init_telemetry;
/// init_telemetry("ai-priority-architect").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(service_name: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_telemetry_with_default(service_name, "info")
}

/// Initialize console logging on stderr.
///
/// The filter comes from `RUST_LOG` and falls back to `default_filter`. Stdout
/// is left untouched so the CLI can print its JSON report there. Only the
/// first call installs a subscriber; later calls are no-ops.
pub fn init_telemetry_with_default(
    service_name: &str,
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut result = Ok(());

    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        result = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .try_init()
            .map_err(Into::into);

        if result.is_ok() {
            tracing::info!(service.name = service_name, "Telemetry initialized");
        }
    });

    result
}
