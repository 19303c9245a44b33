// ============================================================================
// Field Factory
// Creates data items and external fields from declarations
// ============================================================================

use crate::domain::config::{FieldCategory, FieldConfig};
use crate::domain::{Alphabetic, Alphanumeric, Boolean, DataItem, National, Numeric};
use crate::engine::external_field::encode_storage;
use crate::engine::{ExternalField, ExternalRegistry};
use crate::errors::{DataError, DataResult};
use crate::interfaces::PictureItem;

// ============================================================================
// Factory Functions
// ============================================================================

/// A declared field, owning its storage or aliasing external storage
#[derive(Debug, Clone)]
pub enum Field {
    Local(DataItem),
    External(ExternalField),
}

impl Field {
    /// The field's current data item
    pub fn item(&self) -> &DataItem {
        match self {
            Field::Local(item) => item,
            Field::External(field) => field.item(),
        }
    }

    /// Assign a new value; external fields publish it to shared storage.
    pub fn set_value(&mut self, value: &str) -> DataResult<()> {
        match self {
            Field::Local(item) => item.set_value(value),
            Field::External(field) => field.set_value(value),
        }
    }

    pub fn formatted(&self) -> String {
        self.item().formatted()
    }
}

/// Creates a field from configuration
///
/// # Arguments
/// * `config` - Field declaration
/// * `registry` - Registry that resolves external storage
///
/// # Example
/// ```
/// use picture_fields::prelude::*;
///
/// let registry = ExternalRegistry::new();
/// let config = FieldConfig::numeric("WS-TOTAL", 5, 2, false).with_value("123.45");
/// let field = create_from_config(&config, &registry).unwrap();
/// assert_eq!(field.formatted(), "00123.45");
/// ```
pub fn create_from_config(config: &FieldConfig, registry: &ExternalRegistry) -> DataResult<Field> {
    if config.is_external() {
        declare_external(registry, config).map(Field::External)
    } else {
        create_item(config).map(Field::Local)
    }
}

/// Creates the data item a declaration describes, ignoring any external name
pub fn create_item(config: &FieldConfig) -> DataResult<DataItem> {
    // Validate configuration first
    config.validate()?;

    let value = config.initial_value.as_str();
    let item = match config.category {
        FieldCategory::Numeric {
            length,
            fractional_length,
            signed,
        } => Numeric::new(value, length, fractional_length, signed)?.into(),
        FieldCategory::Alphanumeric { length } => Alphanumeric::new(value, length).into(),
        FieldCategory::Alphabetic { length } => Alphabetic::new(value, length)?.into(),
        FieldCategory::National { length } => National::new(value, length).into(),
        FieldCategory::Boolean { length } => Boolean::new(value, length)?.into(),
    };

    Ok(item)
}

/// Declares a field over external storage.
///
/// Resolves the item's storage size under the configured external name. The
/// declaration that allocates the storage seeds it with the item's initial
/// value before the storage becomes visible to any other declaration; later
/// declarations adopt the shared contents instead.
///
/// # Errors
/// - `InvalidConfig` if the declaration has no external name
/// - `ExternalFormatConflict` if the name was resolved with another size
/// - category validation errors from the item or the shared contents
pub fn declare_external(
    registry: &ExternalRegistry,
    config: &FieldConfig,
) -> DataResult<ExternalField> {
    let external_name = config.external_name.as_deref().ok_or_else(|| {
        DataError::InvalidConfig(format!("{} is not declared external", config.name))
    })?;

    let item = create_item(config)?;
    let size = item.storage_size();
    let (buffer, allocated) = registry.resolve_entry(external_name, size, |fresh| {
        fresh.write_at(0, &encode_storage(&item, size));
    })?;

    let mut field = ExternalField::new(config.name.clone(), item, buffer);
    if !allocated {
        field.load()?;
    }

    tracing::debug!(
        field = config.name.as_str(),
        external = external_name,
        category = %field.item().category(),
        allocated,
        "declared external field"
    );

    Ok(field)
}

// ============================================================================
// Builder Pattern for Field Declarations
// ============================================================================

/// Builder for declaring fields with fluent API
///
/// # Example
/// ```
/// use picture_fields::prelude::*;
///
/// let registry = ExternalRegistry::new();
/// let field = FieldBuilder::new("WS-CODE")
///     .alphanumeric(6)
///     .with_value("AB")
///     .build(&registry)
///     .unwrap();
/// assert_eq!(field.formatted(), "AB    ");
/// ```
pub struct FieldBuilder {
    config: FieldConfig,
}

impl FieldBuilder {
    /// Create a new builder; the field defaults to PIC X(1)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: FieldConfig::alphanumeric(name, 1),
        }
    }

    // ========================================================================
    // Category Configuration
    // ========================================================================

    pub fn numeric(mut self, length: usize, fractional_length: usize, signed: bool) -> Self {
        self.config.category = FieldCategory::Numeric {
            length,
            fractional_length,
            signed,
        };
        self
    }

    pub fn alphanumeric(mut self, length: usize) -> Self {
        self.config.category = FieldCategory::Alphanumeric { length };
        self
    }

    pub fn alphabetic(mut self, length: usize) -> Self {
        self.config.category = FieldCategory::Alphabetic { length };
        self
    }

    pub fn national(mut self, length: usize) -> Self {
        self.config.category = FieldCategory::National { length };
        self
    }

    pub fn boolean(mut self, length: usize) -> Self {
        self.config.category = FieldCategory::Boolean { length };
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Set the initial value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.config = self.config.with_value(value);
        self
    }

    /// Alias external storage under the field's own name
    pub fn external(mut self) -> Self {
        self.config = self.config.external();
        self
    }

    /// Alias external storage under an explicit name
    pub fn with_external_name(mut self, name: impl Into<String>) -> Self {
        self.config = self.config.with_external_name(name);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the field
    pub fn build(self, registry: &ExternalRegistry) -> DataResult<Field> {
        create_from_config(&self.config, registry)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &FieldConfig {
        &self.config
    }
}
