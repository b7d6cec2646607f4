//! Environment loading and logging setup shared by all binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load a `.env` file from the working directory, if one exists.
///
/// Must run before argument parsing so env-backed flags see its values.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

/// Default log filter when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr; stdout carries command output only.
pub fn init_tracing(verbose: bool) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(verbose).into());

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
