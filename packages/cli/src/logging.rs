// ABOUTME: Tracing subscriber setup
// ABOUTME: Logs go to stderr so rendered output on stdout stays clean

use tracing_subscriber::EnvFilter;

/// Initialise structured logging; `RUST_LOG` wins over `verbose`
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    // try_init so repeated calls (tests) do not panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
