//! Diagnostic logging for the CLI.
//!
//! Controlled by `ENUMSYNC_LOG`, falling back to `RUST_LOG`; both use the
//! usual filter syntax (`debug`, `enumsync_codegen=trace`, ...). Nothing is
//! installed when neither is set. Output goes to stderr so it never mixes
//! with the progress lines printed on stdout.

use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "ENUMSYNC_LOG";

fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var(LOG_ENV) {
        Some(EnvFilter::builder().parse_lossy(val))
    } else if std::env::var("RUST_LOG").is_ok() {
        Some(EnvFilter::from_default_env())
    } else {
        None
    }
}

/// Install the global subscriber if logging was requested.
pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
