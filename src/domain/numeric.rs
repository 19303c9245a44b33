// ============================================================================
// Numeric Data Item
// Decimal value edited into fixed integer/fractional digit widths
// ============================================================================

use crate::domain::Category;
use crate::editing::{align_fixed_point, edit_sign, is_binary, locate_point};
use crate::errors::{DataError, DataResult};
use crate::interfaces::PictureItem;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Numeric field (PIC 9(length)V9(fractional_length), optionally signed).
///
/// The value is held as a `Decimal` at full precision; the declared widths
/// only apply when the value is edited by [`Numeric::formatted`].
///
/// # Example
/// ```
/// use picture_fields::domain::Numeric;
///
/// let price = Numeric::new("123.45", 5, 2, false)?;
/// assert_eq!(price.formatted(), "00123.45");
///
/// let delta = Numeric::new("-5", 3, 0, true)?;
/// assert_eq!(delta.display_value(), "-005");
/// # Ok::<(), picture_fields::errors::DataError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeric {
    value: Decimal,
    length: usize,
    fractional_length: usize,
    is_signed: bool,
}

impl Numeric {
    /// Create from decimal text.
    ///
    /// Empty text is zero.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the text is not a decimal number.
    pub fn new(
        value: &str,
        length: usize,
        fractional_length: usize,
        signed: bool,
    ) -> DataResult<Self> {
        Ok(Self::from_decimal(
            parse_decimal(value)?,
            length,
            fractional_length,
            signed,
        ))
    }

    /// Create from an already computed decimal.
    pub fn from_decimal(
        value: Decimal,
        length: usize,
        fractional_length: usize,
        signed: bool,
    ) -> Self {
        Self {
            value,
            length,
            fractional_length,
            is_signed: signed,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The stored value at full precision.
    #[inline]
    pub fn decimal(&self) -> Decimal {
        self.value
    }

    #[inline]
    pub fn fractional_length(&self) -> usize {
        self.fractional_length
    }

    #[inline]
    pub fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// The edited value; same as [`Numeric::formatted`].
    pub fn value(&self) -> String {
        self.formatted()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace the value from decimal text.
    ///
    /// # Errors
    /// Returns `InvalidNumber` and leaves the item unchanged if the text is
    /// not a decimal number.
    pub fn set_value(&mut self, value: &str) -> DataResult<()> {
        self.value = parse_decimal(value)?;
        Ok(())
    }

    pub fn set_decimal(&mut self, value: Decimal) {
        self.value = value;
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Unsigned edited digits of the absolute value.
    ///
    /// Excess digits are truncated on both sides, never rounded.
    pub fn formatted(&self) -> String {
        let abs = self.value.abs().to_string();
        align_fixed_point(
            &abs,
            locate_point(&abs),
            self.length,
            self.fractional_length,
        )
    }

    /// Edited value with a leading sign when the field is signed.
    pub fn display_value(&self) -> String {
        edit_sign(
            self.formatted(),
            self.value < Decimal::ZERO,
            self.is_signed,
        )
    }
}

impl PictureItem for Numeric {
    fn category(&self) -> Category {
        Category::Numeric
    }

    fn length(&self) -> usize {
        self.length
    }

    fn is_numeric(&self) -> bool {
        true
    }

    fn is_alphanumeric(&self) -> bool {
        true
    }

    fn is_alphabetic(&self) -> bool {
        false
    }

    fn is_national(&self) -> bool {
        true
    }

    /// Only values whose text is all `0`/`1` digits may move into a boolean
    fn is_boolean(&self) -> bool {
        is_binary(&self.value.to_string())
    }

    fn formatted(&self) -> String {
        Numeric::formatted(self)
    }

    fn width(&self) -> usize {
        if self.fractional_length == 0 {
            self.length
        } else {
            self.length + self.fractional_length + 1
        }
    }
}

/// Parse decimal text, accepting plain and scientific notation.
fn parse_decimal(text: &str) -> DataResult<Decimal> {
    if text.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| DataError::InvalidNumber(text.to_string()))
}
