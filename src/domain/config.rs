// ============================================================================
// Field Declaration Configuration
// Declarative description of a field, consumed by the factory
// ============================================================================

use crate::domain::Category;
use crate::errors::{DataError, DataResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Field Category
// ============================================================================

/// Category of a declared field together with its widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldCategory {
    /// PIC S9(length)V9(fractional_length)
    Numeric {
        /// Integer digit width
        length: usize,
        /// Fractional digit width (0 = integer field)
        fractional_length: usize,
        /// Whether the field carries a sign
        signed: bool,
    },

    /// PIC X(length)
    Alphanumeric { length: usize },

    /// PIC A(length)
    Alphabetic { length: usize },

    /// PIC N(length)
    National { length: usize },

    /// PIC 1(length)
    Boolean { length: usize },
}

impl FieldCategory {
    pub fn category(&self) -> Category {
        match self {
            FieldCategory::Numeric { .. } => Category::Numeric,
            FieldCategory::Alphanumeric { .. } => Category::Alphanumeric,
            FieldCategory::Alphabetic { .. } => Category::Alphabetic,
            FieldCategory::National { .. } => Category::National,
            FieldCategory::Boolean { .. } => Category::Boolean,
        }
    }

    /// Declared width (integer digits for numeric fields)
    pub fn length(&self) -> usize {
        match *self {
            FieldCategory::Numeric { length, .. }
            | FieldCategory::Alphanumeric { length }
            | FieldCategory::Alphabetic { length }
            | FieldCategory::National { length }
            | FieldCategory::Boolean { length } => length,
        }
    }

    /// Total digit or character positions the field declares
    pub fn positions(&self) -> usize {
        match *self {
            FieldCategory::Numeric {
                length,
                fractional_length,
                ..
            } => length + fractional_length,
            other => other.length(),
        }
    }
}

// ============================================================================
// Complete Field Configuration
// ============================================================================

/// Comprehensive configuration for declaring a field
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Data name of the field (e.g., "WS-CUSTOMER-NAME")
    pub name: String,

    /// Category and widths
    pub category: FieldCategory,

    /// Initial value as text; empty means the category's empty value
    pub initial_value: String,

    /// Optional: name of the external storage the field aliases.
    /// None means the field owns its storage.
    pub external_name: Option<String>,
}

impl FieldConfig {
    /// Create a new configuration with required parameters
    pub fn new(name: impl Into<String>, category: FieldCategory) -> Self {
        Self {
            name: name.into(),
            category,
            initial_value: String::new(),
            external_name: None,
        }
    }

    /// Builder method: Set the initial value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Builder method: Alias external storage under the field's own name
    pub fn external(mut self) -> Self {
        self.external_name = Some(self.name.clone());
        self
    }

    /// Builder method: Alias external storage under an explicit name
    pub fn with_external_name(mut self, name: impl Into<String>) -> Self {
        self.external_name = Some(name.into());
        self
    }

    pub fn is_external(&self) -> bool {
        self.external_name.is_some()
    }

    /// Validate the configuration
    pub fn validate(&self) -> DataResult<()> {
        if self.name.is_empty() {
            return Err(DataError::InvalidConfig(
                "field name cannot be empty".to_string(),
            ));
        }

        if self.category.positions() == 0 {
            return Err(DataError::InvalidConfig(format!(
                "{} must declare at least one position",
                self.name
            )));
        }

        if let Some(external) = &self.external_name {
            if external.is_empty() {
                return Err(DataError::InvalidConfig(format!(
                    "{} has an empty external name",
                    self.name
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FieldConfig {
    /// PIC 9(length)V9(fractional_length), with S when `signed`
    pub fn numeric(
        name: impl Into<String>,
        length: usize,
        fractional_length: usize,
        signed: bool,
    ) -> Self {
        Self::new(
            name,
            FieldCategory::Numeric {
                length,
                fractional_length,
                signed,
            },
        )
    }

    /// PIC X(length)
    pub fn alphanumeric(name: impl Into<String>, length: usize) -> Self {
        Self::new(name, FieldCategory::Alphanumeric { length })
    }

    /// PIC A(length)
    pub fn alphabetic(name: impl Into<String>, length: usize) -> Self {
        Self::new(name, FieldCategory::Alphabetic { length })
    }

    /// PIC N(length)
    pub fn national(name: impl Into<String>, length: usize) -> Self {
        Self::new(name, FieldCategory::National { length })
    }

    /// PIC 1(length)
    pub fn boolean(name: impl Into<String>, length: usize) -> Self {
        Self::new(name, FieldCategory::Boolean { length })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = FieldConfig::numeric("WS-AMOUNT", 5, 2, true);

        assert_eq!(config.name, "WS-AMOUNT");
        assert_eq!(config.category.category(), Category::Numeric);
        assert_eq!(config.category.length(), 5);
        assert_eq!(config.category.positions(), 7);
        assert!(!config.is_external());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FieldConfig::alphanumeric("WS-NAME", 20)
            .with_value("SMITH")
            .external();

        assert_eq!(config.initial_value, "SMITH");
        assert_eq!(config.external_name.as_deref(), Some("WS-NAME"));

        let config = FieldConfig::boolean("WS-FLAG", 1).with_external_name("SHARED-FLAG");
        assert_eq!(config.external_name.as_deref(), Some("SHARED-FLAG"));
    }

    #[test]
    fn test_validation() {
        let config = FieldConfig::alphanumeric("", 3);
        assert!(matches!(config.validate(), Err(DataError::InvalidConfig(_))));

        let config = FieldConfig::numeric("WS-EMPTY", 0, 0, false);
        assert!(config.validate().is_err());

        let config = FieldConfig::numeric("WS-FRACTION", 0, 2, false);
        assert!(config.validate().is_ok());

        let config = FieldConfig::national("WS-TEXT", 4).with_external_name("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert!(matches!(
            FieldConfig::alphabetic("A", 1).category,
            FieldCategory::Alphabetic { length: 1 }
        ));
        assert_eq!(
            FieldConfig::national("N", 3).category.category(),
            Category::National
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = FieldConfig::numeric("WS-TOTAL", 7, 2, true)
            .with_value("-12.5")
            .external();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: FieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
