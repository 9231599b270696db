use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Initialize the global tracing subscriber from settings.
///
/// `RUST_LOG` takes precedence over the configured level. Safe to call more
/// than once; later calls are ignored.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
