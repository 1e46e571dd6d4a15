//! Tracing for the crate's own plumbing.
//!
//! These events (toggle resolution, config loading) are filtered by
//! `RUST_LOG` and never gated on `PKL_DEBUG`. The `[pkl-go]` lines written by
//! [`crate::writer`] are a separate channel and ignore `RUST_LOG`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Unset or unparsable directives fall back to `warn`, which keeps stderr
/// free of tracing output in normal runs. A second call is a no-op.
///
/// ```bash
/// RUST_LOG=pkl_diag=debug pkl-diag --config diag.toml status
/// ```
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

fn filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
}
