// ============================================================================
// Text Editing
// Left-justified fitting of text into a fixed character width
// ============================================================================

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Fill character for alphanumeric, alphabetic and national fields
pub const SPACE_FILL: char = ' ';

/// Fit `value` into exactly `width` characters.
///
/// The value is copied left-aligned. Characters past `width` are dropped and
/// a shorter value is padded on the right with `fill`. Width is counted in
/// `char`s, not bytes.
pub fn fit_left(value: &str, width: usize, fill: char) -> String {
    let mut out = String::with_capacity(width);
    let mut taken = 0;
    for c in value.chars().take(width) {
        out.push(c);
        taken += 1;
    }
    out.extend(std::iter::repeat_n(fill, width - taken));
    out
}

/// True if `value` holds any decimal digit (general category Nd), ASCII or
/// otherwise. Superscripts, fractions and letter numerals are not digits.
#[inline]
pub fn contains_digit(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.general_category() == GeneralCategory::DecimalNumber)
}

/// True if `value` is a non-empty run of `'0'`/`'1'` characters.
#[inline]
pub fn is_binary(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b == b'0' || b == b'1')
}
