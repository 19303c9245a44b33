// ============================================================================
// Picture Fields Library
// Fixed-width PICTURE-style data items and shared external storage
// ============================================================================

//! # Picture Fields
//!
//! Runtime value layer for fields declared with a fixed width and a category,
//! the classic PICTURE clause model.
//!
//! ## Features
//!
//! - **Five categories** (numeric, alphanumeric, alphabetic, national,
//!   boolean) behind one closed [`DataItem`](domain::DataItem) enum
//! - **Exact-width editing**: every item renders to its declared width,
//!   truncating overflow and padding with the category fill character
//! - **Fixed-point alignment** for numeric items, truncating (never rounding)
//!   on both sides of the point
//! - **External storage**: a name-keyed registry hands every declaration of
//!   the same external item the same backing buffer
//!
//! ## Example
//!
//! ```rust
//! use picture_fields::prelude::*;
//!
//! // Numeric item: 5 integer digits, 2 fractional digits, unsigned
//! let amount = Numeric::new("123.45", 5, 2, false).unwrap();
//! assert_eq!(amount.formatted(), "00123.45");
//!
//! // Text items truncate or pad to their width
//! let name = Alphanumeric::new("JOHNSON", 4);
//! assert_eq!(name.formatted(), "JOHN");
//!
//! // Two declarations of one external item share storage
//! let registry = ExternalRegistry::new();
//! let a = registry.resolve("COMMON-AREA", 10).unwrap();
//! let b = registry.resolve("COMMON-AREA", 10).unwrap();
//! assert!(a.ptr_eq(&b));
//! ```

pub mod domain;
pub mod editing;
pub mod engine;
pub mod errors;
pub mod interfaces;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Alphabetic, Alphanumeric, Boolean, Category, DataItem, ExternalBuffer, FieldCategory,
        FieldConfig, National, Numeric,
    };
    pub use crate::engine::{
        create_from_config, create_item, declare_external, ExternalField, ExternalRegistry, Field,
        FieldBuilder,
    };
    pub use crate::errors::{DataError, DataResult};
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, PictureItem, ResolverEvent,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_external_sharing() {
        let registry = ExternalRegistry::with_event_handler(Arc::new(LoggingEventHandler));

        // Two independently compiled programs declare the same external total
        let config_a = FieldConfig::numeric("PGM-A-TOTAL", 5, 2, true)
            .with_value("0")
            .with_external_name("GRAND-TOTAL");
        let config_b = FieldConfig::numeric("PGM-B-TOTAL", 5, 2, true)
            .with_external_name("GRAND-TOTAL");

        let mut a = declare_external(&registry, &config_a).unwrap();
        let mut b = declare_external(&registry, &config_b).unwrap();
        assert!(a.buffer().ptr_eq(b.buffer()));

        a.set_value("-1234.5").unwrap();
        b.load().unwrap();

        assert_eq!(b.formatted(), "01234.50");
        assert_eq!(b.item().display_value(), "-01234.50");
        assert_eq!(b.formatted(), a.formatted());

        // A third program with a different layout is a declaration error
        let config_c = FieldConfig::numeric("PGM-C-TOTAL", 10, 0, false)
            .with_external_name("GRAND-TOTAL");
        assert!(matches!(
            declare_external(&registry, &config_c),
            Err(DataError::ExternalFormatConflict { .. })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_testable_properties() {
        assert_eq!(
            Numeric::new("123.45", 5, 2, false).unwrap().formatted(),
            "00123.45"
        );
        assert_eq!(
            Numeric::new("123.456", 3, 1, false).unwrap().formatted(),
            "123.4"
        );
        assert_eq!(Numeric::new("99999", 3, 0, false).unwrap().formatted(), "999");
        assert_eq!(
            Numeric::new("-5", 3, 0, true).unwrap().display_value(),
            "-005"
        );
        assert_eq!(
            Numeric::new("-5", 3, 0, false).unwrap().display_value(),
            "005"
        );
        assert!(Alphabetic::new("A1", 4).is_err());
        assert!(Boolean::new("012", 3).is_err());
        assert_eq!(Boolean::new("", 5).unwrap().formatted(), "00000");
    }

    #[test]
    fn test_resolver_write_visibility() {
        let registry = ExternalRegistry::new();
        let first = registry.resolve("BUF", 10).unwrap();
        let second = registry.resolve("BUF", 10).unwrap();

        first.write_at(0, b"0123456789");
        assert_eq!(second.to_vec(), b"0123456789".to_vec());

        assert!(registry.resolve("BUF", 20).is_err());
        assert_eq!(second.size(), 10);
        assert_eq!(second.to_vec(), b"0123456789".to_vec());
    }
}

#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn assert_fits(formatted: &str, input: &str, length: usize, fill: char) {
        let input_len = input.chars().count();
        assert_eq!(formatted.chars().count(), length);
        if input_len <= length {
            assert!(formatted.starts_with(input));
            assert!(formatted.chars().skip(input_len).all(|c| c == fill));
        } else {
            let truncated: String = input.chars().take(length).collect();
            assert_eq!(formatted, truncated);
        }
    }

    proptest! {
        #[test]
        fn alphanumeric_has_exact_width(input in "[ -~]{1,40}", length in 0usize..32) {
            let item = Alphanumeric::new(&input, length);
            assert_fits(&item.formatted(), &input, length, ' ');
        }

        #[test]
        fn national_has_exact_width(input in "\\PC{1,20}", length in 0usize..16) {
            let item = National::new(&input, length);
            assert_fits(&item.formatted(), &input, length, ' ');
        }

        #[test]
        fn alphabetic_has_exact_width(input in "[A-Za-z -]{1,30}", length in 0usize..24) {
            let item = Alphabetic::new(&input, length).unwrap();
            assert_fits(&item.formatted(), &input, length, ' ');
        }

        #[test]
        fn alphabetic_rejects_any_digit(prefix in "[A-Z]{0,5}", digit in "[0-9]", suffix in "[A-Z]{0,5}") {
            let input = format!("{}{}{}", prefix, digit, suffix);
            let is_violation = matches!(
                Alphabetic::new(&input, 12),
                Err(DataError::FormatViolation { .. })
            );
            prop_assert!(is_violation);
        }

        #[test]
        fn boolean_has_exact_width(input in "[01]{1,20}", length in 0usize..16) {
            let item = Boolean::new(&input, length).unwrap();
            assert_fits(&item.formatted(), &input, length, '0');
        }

        #[test]
        fn numeric_has_declared_width(
            mantissa in any::<i64>(),
            scale in 0u32..10,
            length in 0usize..20,
            fractional_length in 0usize..8,
            signed in any::<bool>(),
        ) {
            let value = Decimal::new(mantissa, scale);
            let item = Numeric::from_decimal(value, length, fractional_length, signed);
            let expected = if fractional_length == 0 {
                length
            } else {
                length + fractional_length + 1
            };
            prop_assert_eq!(item.formatted().len(), expected);
            prop_assert_eq!(item.display_value().len(), expected + usize::from(signed));
        }

        #[test]
        fn numeric_integer_field_keeps_low_digits(value in 0u64..1_000_000_000, length in 1usize..12) {
            let item = Numeric::new(&value.to_string(), length, 0, false).unwrap();
            let padded = format!("{:0>20}", value);
            prop_assert_eq!(item.formatted(), &padded[padded.len() - length..]);
        }
    }
}
