//! minrb driver: reads a JSON syntax tree and evaluates it.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber, once per process, if `RUST_LOG` is set.
///
/// Logs go to stderr so they never interleave with `p` output on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
