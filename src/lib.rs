pub mod catalog; // Static symptom/treatment reference data + validation
pub mod config;
pub mod models;
pub mod risk; // Compound risk aggregation engine
pub mod session; // Wizard session state machine

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding application.
///
/// Call once at startup, before the first screening session is created.
/// `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Somnoscreen core starting v{}", config::APP_VERSION);
}
