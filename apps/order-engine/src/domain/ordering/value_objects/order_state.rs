//! Order state in the lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an order.
///
/// `Created` is the sole initial state. `Shipped`, `Canceled` and
/// `Invalid` are terminal; no trigger leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Order persisted with its cart items consolidated, payment not
    /// yet started.
    Created,
    /// Payment has been initiated with the payment collaborator.
    InPayment,
    /// Payment confirmed.
    Paid,
    /// Order fulfilled and handed to shipping.
    Shipped,
    /// Order canceled by the user or staff.
    Canceled,
    /// Order marked invalid by staff.
    Invalid,
}

impl OrderState {
    /// Every state, in declaration order. Used for table coverage.
    pub const ALL: [Self; 6] = [
        Self::Created,
        Self::InPayment,
        Self::Paid,
        Self::Shipped,
        Self::Canceled,
        Self::Invalid,
    ];

    /// Returns true if the order is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Shipped | Self::Canceled | Self::Invalid)
    }

    /// Returns true if the order is still progressing toward shipment.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "CREATED"),
            Self::InPayment => write!(f, "IN_PAYMENT"),
            Self::Paid => write!(f, "PAID"),
            Self::Shipped => write!(f, "SHIPPED"),
            Self::Canceled => write!(f, "CANCELED"),
            Self::Invalid => write!(f, "INVALID"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_state_is_terminal() {
        assert!(!OrderState::Created.is_terminal());
        assert!(!OrderState::InPayment.is_terminal());
        assert!(!OrderState::Paid.is_terminal());
        assert!(OrderState::Shipped.is_terminal());
        assert!(OrderState::Canceled.is_terminal());
        assert!(OrderState::Invalid.is_terminal());
    }

    #[test]
    fn order_state_is_active() {
        assert!(OrderState::Created.is_active());
        assert!(!OrderState::Canceled.is_active());
    }

    #[test]
    fn order_state_display() {
        assert_eq!(format!("{}", OrderState::InPayment), "IN_PAYMENT");
        assert_eq!(format!("{}", OrderState::Created), "CREATED");
    }

    #[test]
    fn order_state_serde() {
        let json = serde_json::to_string(&OrderState::InPayment).unwrap();
        assert_eq!(json, "\"IN_PAYMENT\"");

        let parsed: OrderState = serde_json::from_str("\"PAID\"").unwrap();
        assert_eq!(parsed, OrderState::Paid);
    }

    #[test]
    fn order_state_all_covers_every_state() {
        assert_eq!(OrderState::ALL.len(), 6);
    }
}
