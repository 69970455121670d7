use std::io;

use tracing::Level;

/// Initialize a stderr tracing subscriber for hosts that don't install
/// their own. Safe to call multiple times; subsequent calls are no-ops
/// for the global subscriber.
pub fn init_default() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
