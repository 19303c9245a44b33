// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod picture_item;

pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, ResolverEvent};
pub use picture_item::PictureItem;
