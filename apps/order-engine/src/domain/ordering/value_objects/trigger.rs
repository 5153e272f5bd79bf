//! Lifecycle triggers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named state change requested on an order.
///
/// The ship trigger carries an optional shipped-at timestamp; that
/// payload travels with the transition request, not the trigger itself,
/// so triggers stay cheap to copy and table-friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trigger {
    /// Mark the order invalid (staff action).
    MarkInvalid,
    /// Cancel the order.
    Cancel,
    /// Confirm payment.
    MarkPaid,
    /// Start payment with the payment collaborator.
    EnterPayment,
    /// Fulfill the order and stamp the shipping date.
    Ship,
}

impl Trigger {
    /// Every trigger, in declaration order. Used for table coverage.
    pub const ALL: [Self; 5] = [
        Self::MarkInvalid,
        Self::Cancel,
        Self::MarkPaid,
        Self::EnterPayment,
        Self::Ship,
    ];
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkInvalid => write!(f, "MARK_INVALID"),
            Self::Cancel => write!(f, "CANCEL"),
            Self::MarkPaid => write!(f, "MARK_PAID"),
            Self::EnterPayment => write!(f, "ENTER_PAYMENT"),
            Self::Ship => write!(f, "SHIP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_display() {
        assert_eq!(format!("{}", Trigger::EnterPayment), "ENTER_PAYMENT");
        assert_eq!(format!("{}", Trigger::Ship), "SHIP");
    }

    #[test]
    fn trigger_serde() {
        let json = serde_json::to_string(&Trigger::MarkPaid).unwrap();
        assert_eq!(json, "\"MARK_PAID\"");

        let parsed: Trigger = serde_json::from_str("\"CANCEL\"").unwrap();
        assert_eq!(parsed, Trigger::Cancel);
    }

    #[test]
    fn trigger_all_covers_every_trigger() {
        assert_eq!(Trigger::ALL.len(), 5);
    }
}
