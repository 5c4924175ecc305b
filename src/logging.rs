//! Logging configuration and initialization
//!
//! The library only emits `tracing` events; applications that want them on
//! stderr can install the subscriber here.

use crate::config::BasisConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging from configuration.
///
/// `RUST_LOG` overrides the verbosity-derived filter. Returns `false` when a
/// global subscriber was already installed.
pub fn init_logging(config: &BasisConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.verbose >= 2)
        .with_thread_ids(config.verbose >= 3)
        .with_line_number(config.verbose >= 3)
        .try_init()
        .is_ok();

    if installed {
        debug!("basis logging initialized at verbosity {}", config.verbose);
    }
    installed
}

/// Initialize tracing with just a verbosity level
pub fn init_tracing(verbose: u8) -> bool {
    init_logging(&BasisConfig::default().with_verbose(verbose))
}
