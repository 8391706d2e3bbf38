use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `DOCSTRING_GUARD_LOG=docstring_guard::checker=debug`.
pub const LOG_ENV: &str = "DOCSTRING_GUARD_LOG";

static INIT: Once = Once::new();

/// Filter level used when `DOCSTRING_GUARD_LOG` is unset or invalid.
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init_logging(verbose: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
