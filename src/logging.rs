//! Tracing setup for binaries embedding the calculator.
//!
//! The library itself only emits `tracing` events; nothing is printed unless
//! a subscriber is installed, either by the host application or by
//! [`init_tracing`].

use crate::config::LogLevel;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber filtered at `level`.
///
/// `RUST_LOG`, when set, takes precedence over `level`. Installing twice is
/// harmless: the second call leaves the first subscriber in place and
/// returns `false`.
pub fn init_tracing(level: LogLevel) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
