//! Tracing bootstrap for binaries and integration tests.

use crate::FacetsResult;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes a console tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` overall with `debug` for the
/// facets crates so query timing lines are visible during development.
pub fn init_tracing() -> FacetsResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,facets=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .ok();

    Ok(())
}
