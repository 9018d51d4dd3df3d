//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber driven by [`CoreConfig`].

use tracing_subscriber::EnvFilter;

use crate::config::CoreConfig;

/// Install the global tracing subscriber
///
/// Returns `false` if a subscriber was already installed (by an earlier
/// call or by the host application); the existing one is kept.
pub fn init_logging(config: &CoreConfig) -> bool {
    let filter = EnvFilter::try_new(config.filter_directive()).unwrap_or_else(|err| {
        eprintln!(
            "Invalid log filter '{}': {}, falling back to info",
            config.filter_directive(),
            err
        );
        EnvFilter::new("info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
