// ============================================================================
// Engine Module
// External storage resolution and field declaration
// ============================================================================

mod external_field;
mod resolver;

pub mod factory;

pub use external_field::ExternalField;
pub use factory::{create_from_config, create_item, declare_external, Field, FieldBuilder};
pub use resolver::ExternalRegistry;
