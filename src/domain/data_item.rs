// ============================================================================
// Data Item
// Closed variant over the five field categories
// ============================================================================

use crate::domain::{Alphabetic, Alphanumeric, Boolean, Category, National, Numeric};
use crate::errors::DataResult;
use crate::interfaces::PictureItem;

/// Widest encoding of one character in shared storage
pub const MAX_CHAR_BYTES: usize = 4;

/// A declared field of any category.
///
/// Every operation dispatches exhaustively on the tag, so adding a category
/// is a compile error everywhere it is not handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataItem {
    Numeric(Numeric),
    Alphanumeric(Alphanumeric),
    Alphabetic(Alphabetic),
    National(National),
    Boolean(Boolean),
}

impl DataItem {
    fn inner(&self) -> &dyn PictureItem {
        match self {
            DataItem::Numeric(item) => item,
            DataItem::Alphanumeric(item) => item,
            DataItem::Alphabetic(item) => item,
            DataItem::National(item) => item,
            DataItem::Boolean(item) => item,
        }
    }

    /// Padding character used to reach the declared width
    pub fn fill(&self) -> char {
        self.category().fill()
    }

    /// Text the surrounding runtime displays: signed numeric items carry a
    /// leading sign, everything else is the plain edited value.
    pub fn display_value(&self) -> String {
        match self {
            DataItem::Numeric(item) => item.display_value(),
            other => other.formatted(),
        }
    }

    /// Replace the value, re-validating it for the category.
    ///
    /// # Errors
    /// `InvalidNumber` for numeric items, `FormatViolation` for alphabetic
    /// and boolean items. The old value is kept on error.
    pub fn set_value(&mut self, value: &str) -> DataResult<()> {
        match self {
            DataItem::Numeric(item) => item.set_value(value),
            DataItem::Alphanumeric(item) => {
                item.set_value(value);
                Ok(())
            },
            DataItem::Alphabetic(item) => item.set_value(value),
            DataItem::National(item) => {
                item.set_value(value);
                Ok(())
            },
            DataItem::Boolean(item) => item.set_value(value),
        }
    }

    /// Bytes the item occupies in shared storage.
    ///
    /// Numeric and boolean text is ASCII, one byte per position, and signed
    /// numeric items carry a separate leading sign byte. The other text
    /// categories reserve [`MAX_CHAR_BYTES`] per character, enough for any
    /// character in UTF-8 and for a surrogate pair in UTF-16.
    pub fn storage_size(&self) -> usize {
        match self {
            DataItem::Numeric(item) if item.is_signed() => item.width() + 1,
            DataItem::Numeric(_) | DataItem::Boolean(_) => self.width(),
            other => other.width() * MAX_CHAR_BYTES,
        }
    }
}

impl PictureItem for DataItem {
    fn category(&self) -> Category {
        self.inner().category()
    }

    fn length(&self) -> usize {
        self.inner().length()
    }

    fn is_numeric(&self) -> bool {
        self.inner().is_numeric()
    }

    fn is_alphanumeric(&self) -> bool {
        self.inner().is_alphanumeric()
    }

    fn is_alphabetic(&self) -> bool {
        self.inner().is_alphabetic()
    }

    fn is_national(&self) -> bool {
        self.inner().is_national()
    }

    fn is_boolean(&self) -> bool {
        self.inner().is_boolean()
    }

    fn formatted(&self) -> String {
        self.inner().formatted()
    }

    fn width(&self) -> usize {
        self.inner().width()
    }
}

impl From<Numeric> for DataItem {
    fn from(item: Numeric) -> Self {
        DataItem::Numeric(item)
    }
}

impl From<Alphanumeric> for DataItem {
    fn from(item: Alphanumeric) -> Self {
        DataItem::Alphanumeric(item)
    }
}

impl From<Alphabetic> for DataItem {
    fn from(item: Alphabetic) -> Self {
        DataItem::Alphabetic(item)
    }
}

impl From<National> for DataItem {
    fn from(item: National) -> Self {
        DataItem::National(item)
    }
}

impl From<Boolean> for DataItem {
    fn from(item: Boolean) -> Self {
        DataItem::Boolean(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<DataItem> {
        vec![
            Numeric::new("-12.5", 3, 2, true).unwrap().into(),
            Alphanumeric::new("CODE-7", 8).into(),
            Alphabetic::new("NAME", 6).unwrap().into(),
            National::new("ÜBER", 5).into(),
            Boolean::new("11", 4).unwrap().into(),
        ]
    }

    #[test]
    fn test_dispatch_category() {
        let categories: Vec<Category> = samples().iter().map(|item| item.category()).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_formatted_width_matches() {
        for item in samples() {
            assert_eq!(item.formatted().chars().count(), item.width());
        }
    }

    #[test]
    fn test_display_value() {
        let items = samples();
        assert_eq!(items[0].display_value(), "-012.50");
        assert_eq!(items[1].display_value(), "CODE-7  ");
        assert_eq!(items[4].display_value(), "1100");
    }

    #[test]
    fn test_fill() {
        let items = samples();
        assert_eq!(items[0].fill(), '0');
        assert_eq!(items[3].fill(), ' ');
    }

    #[test]
    fn test_set_value_dispatch() {
        let mut items = samples();
        items[0].set_value("7").unwrap();
        assert_eq!(items[0].display_value(), "+007.00");

        assert!(items[2].set_value("R2D2").is_err());
        assert_eq!(items[2].formatted(), "NAME  ");

        assert!(items[4].set_value("0101").is_ok());
        assert!(items[4].set_value("abc").is_err());
    }

    #[test]
    fn test_storage_size() {
        let items = samples();
        assert_eq!(items[0].storage_size(), 7);
        assert_eq!(items[1].storage_size(), 32);
        assert_eq!(items[2].storage_size(), 24);
        assert_eq!(items[3].storage_size(), 20);
        assert_eq!(items[4].storage_size(), 4);
        assert_eq!(
            DataItem::from(Numeric::new("1", 4, 0, false).unwrap()).storage_size(),
            4
        );
    }
}
