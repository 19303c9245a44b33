// ============================================================================
// Utilities Module
// Helpers for hosting programs
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
