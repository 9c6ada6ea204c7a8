//! Tracing subscriber setup shared by every demo binary.
//!
//! Demo output goes to stdout with `println!`; diagnostics (instance
//! creation, registry hits, facade steps) go through `tracing` and are hidden
//! unless `RUST_LOG` asks for them, e.g. `RUST_LOG=design_model=debug`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global fmt subscriber.
///
/// Respects `RUST_LOG`, falling back to `warn`. A second call (for example
/// from the catalogue binary after a demo already initialised logging) is a
/// no-op.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_names(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
