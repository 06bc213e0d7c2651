//! Tracing subscriber setup for the command line

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "mastermind_solver=warn",
        1 => "mastermind_solver=info",
        2 => "mastermind_solver=debug",
        _ => "mastermind_solver=trace",
    }
}

/// Install a stderr subscriber
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this twice is
/// harmless: the second call keeps the first subscriber.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
