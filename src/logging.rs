//! Tracing setup for the command-line binary.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive list, e.g.
/// `CODINGSTYLE_GUARD_LOG=codingstyle_guard::engine=trace`.
pub const LOG_ENV: &str = "CODINGSTYLE_GUARD_LOG";

static INIT: Once = Once::new();

/// Default filter directive for the given verbosity flags.
#[must_use]
pub fn default_directive(verbose: u8, quiet: bool) -> String {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    format!("codingstyle_guard={level}")
}

/// Install the global subscriber, writing to stderr.
///
/// `CODINGSTYLE_GUARD_LOG` wins over the `-v`/`-q` flags when it parses.
/// Later calls are no-ops.
pub fn init_tracing(verbose: u8, quiet: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose >= 2),
            )
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
