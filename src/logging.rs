//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. Stdout is reserved for the
//! rendered status text, which tmux reads verbatim.

use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "tmux_status=debug"
    } else {
        "tmux_status=warn"
    }
}

/// Initialize the stderr subscriber. `RUST_LOG` takes precedence over
/// `verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Ignore the error if a subscriber is already installed (tests)
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init();
}
