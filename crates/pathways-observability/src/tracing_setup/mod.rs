//! Tracing initialization.

use std::sync::Once;

use pathways_core::config::ObservabilityConfig;
use pathways_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the subscriber from `PATHWAYS_LOG`, falling back to `info`.
///
/// Format: `PATHWAYS_LOG=pathways_graph=debug,pathways_core=warn`
///
/// Idempotent: only the first call in a process installs a subscriber.
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}

/// Initialize from configuration. `PATHWAYS_LOG` still takes precedence over
/// `config.log_level`.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Initialize with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // Another subscriber may already be set globally (e.g. by a test harness).
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_line_number(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if let Err(e) = result {
            tracing::debug!(error = %e, "tracing subscriber already installed");
        }
    });
}
