//! Diagnostic logging setup (stderr, `RUST_LOG` aware)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber; `verbose` raises the crate to debug level
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "staff_roster=debug,info"
    } else {
        "staff_roster=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // No-op when a global subscriber is already set
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
