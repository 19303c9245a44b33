// ============================================================================
// Text Data Items
// Alphanumeric, Alphabetic, National and Boolean fields
// ============================================================================

use crate::domain::Category;
use crate::editing::{contains_digit, fit_left, is_binary};
use crate::errors::{DataError, DataResult};
use crate::interfaces::PictureItem;

/// Apply the empty-assignment rule of a category.
fn normalize(category: Category, value: &str) -> String {
    if value.is_empty() {
        category.empty_value().to_string()
    } else {
        value.to_string()
    }
}

fn violation(category: Category, value: &str) -> DataError {
    DataError::FormatViolation {
        category,
        value: value.to_string(),
    }
}

fn check_alphabetic(value: &str) -> DataResult<()> {
    if contains_digit(value) {
        return Err(violation(Category::Alphabetic, value));
    }
    Ok(())
}

fn check_boolean(value: &str) -> DataResult<()> {
    if !is_binary(value) {
        return Err(violation(Category::Boolean, value));
    }
    Ok(())
}

// ============================================================================
// Alphanumeric
// ============================================================================

/// Alphanumeric field (PIC X), any characters, space filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphanumeric {
    value: String,
    length: usize,
}

impl Alphanumeric {
    pub fn new(value: &str, length: usize) -> Self {
        Self {
            value: normalize(Category::Alphanumeric, value),
            length,
        }
    }

    /// Raw value as assigned, before width editing.
    pub fn raw(&self) -> &str {
        &self.value
    }

    pub fn value(&self) -> String {
        self.formatted()
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = normalize(Category::Alphanumeric, value);
    }

    pub fn formatted(&self) -> String {
        fit_left(&self.value, self.length, Category::Alphanumeric.fill())
    }
}

impl PictureItem for Alphanumeric {
    fn category(&self) -> Category {
        Category::Alphanumeric
    }

    fn length(&self) -> usize {
        self.length
    }

    fn is_numeric(&self) -> bool {
        false
    }

    fn is_alphanumeric(&self) -> bool {
        true
    }

    fn is_alphabetic(&self) -> bool {
        !contains_digit(&self.formatted())
    }

    fn is_national(&self) -> bool {
        true
    }

    fn is_boolean(&self) -> bool {
        false
    }

    fn formatted(&self) -> String {
        Alphanumeric::formatted(self)
    }
}

// ============================================================================
// Alphabetic
// ============================================================================

/// Alphabetic field (PIC A). Never holds a digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabetic {
    value: String,
    length: usize,
}

impl Alphabetic {
    /// # Errors
    /// Returns `FormatViolation` if the value contains a digit.
    pub fn new(value: &str, length: usize) -> DataResult<Self> {
        check_alphabetic(value)?;
        Ok(Self {
            value: normalize(Category::Alphabetic, value),
            length,
        })
    }

    pub fn raw(&self) -> &str {
        &self.value
    }

    pub fn value(&self) -> String {
        self.formatted()
    }

    /// # Errors
    /// Returns `FormatViolation` and keeps the old value if the new one
    /// contains a digit.
    pub fn set_value(&mut self, value: &str) -> DataResult<()> {
        check_alphabetic(value)?;
        self.value = normalize(Category::Alphabetic, value);
        Ok(())
    }

    pub fn formatted(&self) -> String {
        fit_left(&self.value, self.length, Category::Alphabetic.fill())
    }
}

impl PictureItem for Alphabetic {
    fn category(&self) -> Category {
        Category::Alphabetic
    }

    fn length(&self) -> usize {
        self.length
    }

    fn is_numeric(&self) -> bool {
        false
    }

    fn is_alphanumeric(&self) -> bool {
        false
    }

    fn is_alphabetic(&self) -> bool {
        true
    }

    fn is_national(&self) -> bool {
        false
    }

    fn is_boolean(&self) -> bool {
        false
    }

    fn formatted(&self) -> String {
        Alphabetic::formatted(self)
    }
}

// ============================================================================
// National
// ============================================================================

/// National field (PIC N), Unicode text, space filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct National {
    value: String,
    length: usize,
}

impl National {
    pub fn new(value: &str, length: usize) -> Self {
        Self {
            value: normalize(Category::National, value),
            length,
        }
    }

    pub fn raw(&self) -> &str {
        &self.value
    }

    pub fn value(&self) -> String {
        self.formatted()
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = normalize(Category::National, value);
    }

    pub fn formatted(&self) -> String {
        fit_left(&self.value, self.length, Category::National.fill())
    }
}

impl PictureItem for National {
    fn category(&self) -> Category {
        Category::National
    }

    fn length(&self) -> usize {
        self.length
    }

    fn is_numeric(&self) -> bool {
        false
    }

    fn is_alphanumeric(&self) -> bool {
        true
    }

    fn is_alphabetic(&self) -> bool {
        !contains_digit(&self.formatted())
    }

    fn is_national(&self) -> bool {
        true
    }

    fn is_boolean(&self) -> bool {
        false
    }

    fn formatted(&self) -> String {
        National::formatted(self)
    }
}

// ============================================================================
// Boolean
// ============================================================================

/// Boolean field (PIC 1), `'0'`/`'1'` only, zero filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boolean {
    value: String,
    length: usize,
}

impl Boolean {
    /// Empty text is `"0"`.
    ///
    /// # Errors
    /// Returns `FormatViolation` if the value is not all `0`/`1`.
    pub fn new(value: &str, length: usize) -> DataResult<Self> {
        let value = normalize(Category::Boolean, value);
        check_boolean(&value)?;
        Ok(Self { value, length })
    }

    pub fn raw(&self) -> &str {
        &self.value
    }

    pub fn value(&self) -> String {
        self.formatted()
    }

    /// # Errors
    /// Returns `FormatViolation` and keeps the old value if the new one is
    /// not all `0`/`1`.
    pub fn set_value(&mut self, value: &str) -> DataResult<()> {
        let value = normalize(Category::Boolean, value);
        check_boolean(&value)?;
        self.value = value;
        Ok(())
    }

    pub fn formatted(&self) -> String {
        fit_left(&self.value, self.length, Category::Boolean.fill())
    }
}

impl PictureItem for Boolean {
    fn category(&self) -> Category {
        Category::Boolean
    }

    fn length(&self) -> usize {
        self.length
    }

    fn is_numeric(&self) -> bool {
        false
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

    fn is_boolean(&self) -> bool {
        true
    }

    fn formatted(&self) -> String {
        Boolean::formatted(self)
    }
}
