// ============================================================================
// Data Item Errors
// Declaration mistakes detected while building, mutating, or resolving fields
// ============================================================================

use crate::domain::Category;
use std::fmt;

/// Errors raised by data item validation and external storage resolution.
///
/// Every variant describes a programmer or declaration mistake. None of them
/// is transient, so callers are expected to fix the declaration rather than
/// retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Text rejected by a category's validation rule
    FormatViolation { category: Category, value: String },
    /// Same external name requested with two different sizes
    ExternalFormatConflict {
        name: String,
        existing: usize,
        requested: usize,
    },
    /// External storage must be at least one byte
    InvalidExternalSize { name: String },
    /// Numeric text the decimal engine could not parse
    InvalidNumber(String),
    /// Field declaration failed validation
    InvalidConfig(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::FormatViolation { category, value } => match category {
                Category::Alphabetic => write!(
                    f,
                    "format violation: alphabetic item cannot contain digits: {:?}",
                    value
                ),
                Category::Boolean => write!(
                    f,
                    "format violation: boolean item can only contain 1s and 0s: {:?}",
                    value
                ),
                other => write!(f, "format violation: {} item rejected {:?}", other, value),
            },
            DataError::ExternalFormatConflict {
                name,
                existing,
                requested,
            } => write!(
                f,
                "external format conflict: {} is {} bytes, requested {} bytes",
                name, existing, requested
            ),
            DataError::InvalidExternalSize { name } => {
                write!(f, "invalid external size: {} must be at least 1 byte", name)
            },
            DataError::InvalidNumber(text) => {
                write!(f, "invalid number: could not parse {:?}", text)
            },
            DataError::InvalidConfig(reason) => write!(f, "invalid field declaration: {}", reason),
        }
    }
}

impl std::error::Error for DataError {}

/// Result type alias for data item operations
pub type DataResult<T> = Result<T, DataError>;
