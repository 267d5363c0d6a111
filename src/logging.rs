//! Diagnostic output for the command line tools

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Send tracing events to stderr
///
/// The level defaults to `warn` and can be changed with `RUST_LOG`, e.g.
/// `RUST_LOG=maze_game=debug`. Calling this more than once has no effect.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
