// ============================================================================
// Fixed-Point Editing
// Aligns decimal text into fixed integer/fractional digit widths
// ============================================================================

/// Fill character for numeric fields
pub const NUMERIC_FILL: char = '0';

/// Return the byte index of the decimal point in `text`, or `text.len()` when
/// there is none.
///
/// A text without a point is treated as having an implicit `.0` at the end,
/// which is exactly what the returned index describes.
#[inline]
pub fn locate_point(text: &str) -> usize {
    text.find('.').unwrap_or(text.len())
}

/// Align unsigned decimal text into a fixed-width field.
///
/// # Arguments
/// - `abs_text`: digits of the absolute value, optionally with one `.`
/// - `point_index`: byte index of the point (or `abs_text.len()` if absent)
/// - `length`: integer digit width
/// - `fractional_length`: fractional digit width
///
/// The integer side keeps the `length` least-significant digits and is
/// zero-padded on the left. The fractional side keeps the
/// `fractional_length` most-significant digits and is zero-padded on the
/// right. Excess digits are dropped, never rounded.
///
/// With `fractional_length == 0` the result is `length` characters and no
/// point; otherwise it is `length + fractional_length + 1` characters.
///
/// # Example
/// ```
/// use picture_fields::editing::align_fixed_point;
///
/// assert_eq!(align_fixed_point("123.45", 3, 5, 2), "00123.45");
/// assert_eq!(align_fixed_point("12345.678", 5, 3, 1), "345.6");
/// assert_eq!(align_fixed_point("99999", 5, 3, 0), "999");
/// ```
pub fn align_fixed_point(
    abs_text: &str,
    point_index: usize,
    length: usize,
    fractional_length: usize,
) -> String {
    let bytes = abs_text.as_bytes();
    let point_index = point_index.min(bytes.len());
    let integer_digits = &bytes[..point_index];
    let fraction_digits = bytes.get(point_index + 1..).unwrap_or(&[]);

    let width = if fractional_length == 0 {
        length
    } else {
        length + fractional_length + 1
    };
    let mut out = String::with_capacity(width);

    // Integer side: left-pad, drop most-significant overflow
    let kept = integer_digits.len().min(length);
    out.extend(std::iter::repeat_n(NUMERIC_FILL, length - kept));
    out.extend(
        integer_digits[integer_digits.len() - kept..]
            .iter()
            .map(|&b| b as char),
    );

    if fractional_length == 0 {
        return out;
    }

    // Fractional side: right-pad, drop least-significant overflow
    out.push('.');
    let kept = fraction_digits.len().min(fractional_length);
    out.extend(fraction_digits[..kept].iter().map(|&b| b as char));
    out.extend(std::iter::repeat_n(NUMERIC_FILL, fractional_length - kept));

    out
}

/// Prefix an edited body with its sign character.
///
/// Unsigned fields never carry a sign; signed fields always do, `-` for
/// negative values and `+` otherwise.
#[inline]
pub fn edit_sign(body: String, is_negative: bool, is_signed: bool) -> String {
    if !is_signed {
        return body;
    }

    let mut out = String::with_capacity(body.len() + 1);
    out.push(if is_negative { '-' } else { '+' });
    out.push_str(&body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn align(text: &str, length: usize, fractional_length: usize) -> String {
        align_fixed_point(text, locate_point(text), length, fractional_length)
    }

    #[test]
    fn test_locate_point() {
        assert_eq!(locate_point("123.45"), 3);
        assert_eq!(locate_point("123"), 3);
        assert_eq!(locate_point(".5"), 0);
        assert_eq!(locate_point(""), 0);
    }

    #[test]
    fn test_integer_padding() {
        assert_eq!(align("5", 3, 0), "005");
        assert_eq!(align("0", 4, 0), "0000");
        assert_eq!(align("123", 3, 0), "123");
    }

    #[test]
    fn test_integer_overflow_drops_leading_digits() {
        assert_eq!(align("99999", 3, 0), "999");
        assert_eq!(align("12345", 2, 0), "45");
    }

    #[test]
    fn test_fraction_discarded_without_fractional_width() {
        // Truncation, not rounding
        assert_eq!(align("12.99", 4, 0), "0012");
        assert_eq!(align("0.999", 1, 0), "0");
    }

    #[test]
    fn test_aligned_on_point() {
        assert_eq!(align("123.45", 5, 2), "00123.45");
        assert_eq!(align("1.5", 3, 3), "001.500");
        assert_eq!(align("0.05", 1, 2), "0.05");
    }

    #[test]
    fn test_implicit_fraction() {
        assert_eq!(align("42", 4, 2), "0042.00");
        assert_eq!(align("0", 1, 1), "0.0");
    }

    #[test]
    fn test_fraction_overflow_truncates() {
        assert_eq!(align("123.456", 3, 1), "123.4");
        assert_eq!(align("0.129", 2, 2), "00.12");
    }

    #[test]
    fn test_both_sides_overflow() {
        assert_eq!(align("12345.6789", 3, 2), "345.67");
    }

    #[test]
    fn test_zero_integer_width() {
        assert_eq!(align("7.25", 0, 2), ".25");
        assert_eq!(align("7", 0, 0), "");
    }

    #[test]
    fn test_point_index_past_end_is_clamped() {
        assert_eq!(align_fixed_point("12", 10, 3, 1), "012.0");
    }

    #[test]
    fn test_edit_sign() {
        assert_eq!(edit_sign("005".to_string(), true, true), "-005");
        assert_eq!(edit_sign("005".to_string(), false, true), "+005");
        assert_eq!(edit_sign("005".to_string(), true, false), "005");
    }
}
