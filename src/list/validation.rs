//! Input validation for item names and quantities.

use thiserror::Error;

/// Why an add was rejected. Name and quantity are checked independently,
/// so both may fail at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("Item name cannot be blank")]
    InvalidName,
    #[error("Item quantity should be a number")]
    InvalidQuantity,
    #[error("Item name cannot be blank and quantity should be a number")]
    InvalidNameAndQuantity,
}

impl AddError {
    /// Combine the two independent checks. `None` when both passed.
    pub fn from_checks(name_ok: bool, quantity_ok: bool) -> Option<Self> {
        match (name_ok, quantity_ok) {
            (true, true) => None,
            (false, true) => Some(Self::InvalidName),
            (true, false) => Some(Self::InvalidQuantity),
            (false, false) => Some(Self::InvalidNameAndQuantity),
        }
    }

    pub fn invalid_name(&self) -> bool {
        matches!(self, Self::InvalidName | Self::InvalidNameAndQuantity)
    }

    pub fn invalid_quantity(&self) -> bool {
        matches!(self, Self::InvalidQuantity | Self::InvalidNameAndQuantity)
    }
}

/// Returns the trimmed name, or `None` when it is blank.
pub fn validate_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse a quantity. Accepts finite, non-negative numbers; surrounding
/// whitespace is ignored.
pub fn parse_quantity(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Lenient parse used when committing an edit: anything unparseable is `0.0`.
pub fn parse_quantity_or_zero(text: &str) -> f64 {
    parse_quantity(text).unwrap_or(0.0)
}

/// Display form of a quantity. Integral values keep a `.0` suffix.
pub fn format_quantity(quantity: f64) -> String {
    format!("{:?}", quantity)
}
