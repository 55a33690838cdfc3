//! Log output for the binary.
//!
//! Events go to stderr so stdout only ever carries results. The filter comes
//! from `RUST_LOG` and defaults to `warn`; `RUST_LOG=ulidgen=trace` shows a
//! span per generated ID, including the library's overflow events.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber.
///
/// # Errors
/// Fails if `RUST_LOG` cannot be parsed or a global subscriber is already set.
pub fn init_telemetry() -> anyhow::Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => EnvFilter::new(DEFAULT_FILTER),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;

    Ok(())
}
