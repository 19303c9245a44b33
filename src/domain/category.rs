// ============================================================================
// Data Item Category
// ============================================================================

use crate::editing::{NUMERIC_FILL, SPACE_FILL};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five PICTURE categories a field can be declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// PIC 9 / S9 / 9V9
    Numeric,
    /// PIC X
    Alphanumeric,
    /// PIC A
    Alphabetic,
    /// PIC N
    National,
    /// PIC 1
    Boolean,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Numeric,
        Category::Alphanumeric,
        Category::Alphabetic,
        Category::National,
        Category::Boolean,
    ];

    /// Padding character used to reach the declared width
    pub fn fill(&self) -> char {
        match self {
            Category::Numeric | Category::Boolean => NUMERIC_FILL,
            Category::Alphanumeric | Category::Alphabetic | Category::National => SPACE_FILL,
        }
    }

    /// Value an empty assignment normalizes to
    pub fn empty_value(&self) -> &'static str {
        match self {
            Category::Numeric | Category::Boolean => "0",
            Category::Alphanumeric | Category::Alphabetic | Category::National => " ",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Numeric => "numeric",
            Category::Alphanumeric => "alphanumeric",
            Category::Alphabetic => "alphabetic",
            Category::National => "national",
            Category::Boolean => "boolean",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_characters() {
        assert_eq!(Category::Numeric.fill(), '0');
        assert_eq!(Category::Boolean.fill(), '0');
        assert_eq!(Category::Alphanumeric.fill(), ' ');
        assert_eq!(Category::Alphabetic.fill(), ' ');
        assert_eq!(Category::National.fill(), ' ');
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(Category::Boolean.empty_value(), "0");
        assert_eq!(Category::National.empty_value(), " ");
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Alphanumeric.to_string(), "alphanumeric");
        assert_eq!(Category::ALL.len(), 5);
    }
}
