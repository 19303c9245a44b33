// ============================================================================
// Editing Module
// Pure functions that render values into exact-width field text
// ============================================================================
//
// This module provides:
// - align_fixed_point: decimal text -> fixed integer/fractional widths
// - fit_left: left-justified truncate-or-pad for text categories
// - edit_sign: leading sign for signed numeric display
//
// Design principles:
// - No mutation, no allocation beyond the result string
// - Overflow is truncated on both sides, never rounded
// - Width counted in characters

mod fixed_point;
mod text;

pub use fixed_point::{align_fixed_point, edit_sign, locate_point, NUMERIC_FILL};
pub use text::{contains_digit, fit_left, is_binary, SPACE_FILL};
