// ============================================================================
// Domain Models Module
// Contains the field categories, data items and external storage
// ============================================================================

mod category;
mod data_item;
mod external;
mod numeric;
mod text;

pub mod config;

pub use category::Category;
pub use config::{FieldCategory, FieldConfig};
pub use data_item::{DataItem, MAX_CHAR_BYTES};
pub use external::{ExternalBuffer, ExternalDataItem};
pub use numeric::Numeric;
pub use text::{Alphabetic, Alphanumeric, Boolean, National};
