// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a global formatting subscriber at `level`.
///
/// Returns `false` if a global subscriber was already set, which is the
/// normal outcome when tests or a host program installed their own first.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
