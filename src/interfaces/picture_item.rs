// ============================================================================
// Picture Item Interface
// Capability contract shared by every data item category
// ============================================================================

use crate::domain::Category;

/// Classification predicates plus exact-width rendering.
///
/// The predicates are consumed by the surrounding runtime to decide which
/// implicit conversions (MOVE-style transfers) are legal. Some of them depend
/// on the item's current value, so they take `&self`.
pub trait PictureItem: Send + Sync {
    /// Category tag of the item
    fn category(&self) -> Category;

    /// Declared width (characters, or integer digits for numeric items)
    fn length(&self) -> usize;

    fn is_numeric(&self) -> bool;

    fn is_alphanumeric(&self) -> bool;

    fn is_alphabetic(&self) -> bool;

    fn is_national(&self) -> bool;

    fn is_boolean(&self) -> bool;

    /// Exact-width text of the current value.
    ///
    /// Never fails and never mutates the item.
    fn formatted(&self) -> String;

    /// Number of characters `formatted` produces.
    ///
    /// Default implementation handles every text category; numeric items add
    /// their fractional digits and point.
    fn width(&self) -> usize {
        self.length()
    }
}
