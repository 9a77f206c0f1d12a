//! Diagnostic logging for the command-line tool
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - every conversion
//! - `RUST_LOG=vimview::controller=debug` - module-level filtering
//!
//! Logs go to stderr so they never mix with rendered output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the stderr subscriber; `warn` unless RUST_LOG says otherwise
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
