//! Quantity value object for order item quantities.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A positive whole-unit quantity for an order item.
///
/// Quantities are always at least one; a cart line with nothing in it
/// does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// A quantity of one, the default for new cart lines.
    pub const ONE: Self = Self(1);

    /// Create a new Quantity.
    ///
    /// # Errors
    ///
    /// Returns error if the quantity is zero.
    pub fn new(amount: u32) -> Result<Self, DomainError> {
        if amount == 0 {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: "quantity must be positive".to_string(),
            });
        }
        Ok(Self(amount))
    }

    /// Get the inner value.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
