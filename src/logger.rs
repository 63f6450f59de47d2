//! Logger setup with tracing-subscriber.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `bin_name=default_level`
/// is used as the filter directive.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let default_directive = format!("{}={}", bin_name.replace('-', "_"), default_level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
