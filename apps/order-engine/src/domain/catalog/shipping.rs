//! Shipping record entity.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{DomainError, Money, ShippingId, Timestamp};

/// Delivery details for an order: address, fee, and the fulfillment
/// date (unset until the order actually ships).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipping {
    id: ShippingId,
    address: String,
    date: Option<Timestamp>,
    fee: Money,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Shipping {
    /// Create a new shipping record.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the fee is negative.
    pub fn new(address: impl Into<String>, fee: Money) -> Result<Self, DomainError> {
        let address = address.into();
        if address.is_empty() {
            return Err(DomainError::InvalidValue {
                field: "address".to_string(),
                message: "shipping address cannot be empty".to_string(),
            });
        }
        fee.validate_non_negative("fee")?;
        let now = Timestamp::now();
        Ok(Self {
            id: ShippingId::generate(),
            address,
            date: None,
            fee,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get the shipping id.
    #[must_use]
    pub const fn id(&self) -> &ShippingId {
        &self.id
    }

    /// Get the delivery address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get the fulfillment date, if the order has shipped.
    #[must_use]
    pub const fn date(&self) -> Option<Timestamp> {
        self.date
    }

    /// Get the shipping fee.
    #[must_use]
    pub const fn fee(&self) -> Money {
        self.fee
    }

    /// Stamp the fulfillment date. Called by the ship transition.
    pub fn set_date(&mut self, date: Timestamp) {
        self.date = Some(date);
        self.updated_at = Timestamp::now();
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipping_new() {
        let shipping = Shipping::new("1 Main St", Money::from_cents(500)).unwrap();
        assert_eq!(shipping.address(), "1 Main St");
        assert_eq!(shipping.fee(), Money::from_cents(500));
        assert!(shipping.date().is_none());
    }

    #[test]
    fn shipping_rejects_empty_address() {
        assert!(Shipping::new("", Money::ZERO).is_err());
    }

    #[test]
    fn shipping_rejects_negative_fee() {
        assert!(Shipping::new("1 Main St", Money::from_major(-1)).is_err());
    }

    #[test]
    fn shipping_set_date() {
        let mut shipping = Shipping::new("1 Main St", Money::ZERO).unwrap();
        let date = Timestamp::parse("2026-03-01T12:00:00Z").unwrap();
        shipping.set_date(date);
        assert_eq!(shipping.date(), Some(date));
    }
}
