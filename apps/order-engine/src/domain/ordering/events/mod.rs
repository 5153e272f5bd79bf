//! Domain events for the order lifecycle.
//!
//! Events capture state transitions and are drained by callers after a
//! successful commit.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{OrderId, PaymentReference, PaymentTypeCode, Timestamp, UserId};

/// All possible order events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEvent {
    /// Order created with its cart items consolidated.
    Created(OrderCreated),
    /// Payment initiated with the payment collaborator.
    PaymentEntered(OrderPaymentEntered),
    /// Payment confirmed.
    Paid(OrderPaid),
    /// Order fulfilled.
    Shipped(OrderShipped),
    /// Order canceled.
    Canceled(OrderCanceled),
    /// Order marked invalid.
    Invalidated(OrderInvalidated),
}

impl OrderEvent {
    /// Get the order ID for this event.
    #[must_use]
    pub fn order_id(&self) -> &OrderId {
        match self {
            Self::Created(e) => &e.order_id,
            Self::PaymentEntered(e) => &e.order_id,
            Self::Paid(e) => &e.order_id,
            Self::Shipped(e) => &e.order_id,
            Self::Canceled(e) => &e.order_id,
            Self::Invalidated(e) => &e.order_id,
        }
    }

    /// Get the timestamp when this event occurred.
    #[must_use]
    pub fn occurred_at(&self) -> Timestamp {
        match self {
            Self::Created(e) => e.occurred_at,
            Self::PaymentEntered(e) => e.occurred_at,
            Self::Paid(e) => e.occurred_at,
            Self::Shipped(e) => e.occurred_at,
            Self::Canceled(e) => e.occurred_at,
            Self::Invalidated(e) => e.occurred_at,
        }
    }

    /// Get the event type name.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::Created(_) => "ORDER_CREATED",
            Self::PaymentEntered(_) => "ORDER_PAYMENT_ENTERED",
            Self::Paid(_) => "ORDER_PAID",
            Self::Shipped(_) => "ORDER_SHIPPED",
            Self::Canceled(_) => "ORDER_CANCELED",
            Self::Invalidated(_) => "ORDER_INVALIDATED",
        }
    }
}

/// Event: Order created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    /// Order ID.
    pub order_id: OrderId,
    /// Owning user.
    pub user: UserId,
    /// Chosen payment type.
    pub payment_type: PaymentTypeCode,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: Payment initiated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaymentEntered {
    /// Order ID.
    pub order_id: OrderId,
    /// Payment reference, when the collaborator returned one.
    pub payment_id: Option<PaymentReference>,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: Payment confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaid {
    /// Order ID.
    pub order_id: OrderId,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: Order fulfilled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderShipped {
    /// Order ID.
    pub order_id: OrderId,
    /// The fulfillment date stamped on the shipping record.
    pub shipped_at: Timestamp,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: Order canceled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCanceled {
    /// Order ID.
    pub order_id: OrderId,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: Order marked invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInvalidated {
    /// Order ID.
    pub order_id: OrderId,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_accessors() {
        let event = OrderEvent::Paid(OrderPaid {
            order_id: OrderId::new("ord-1"),
            occurred_at: Timestamp::now(),
        });
        assert_eq!(event.order_id().as_str(), "ord-1");
        assert_eq!(event.event_type(), "ORDER_PAID");
        assert!(event.occurred_at().unix_seconds() > 0);
    }

    #[test]
    fn event_serde_tagged() {
        let event = OrderEvent::Canceled(OrderCanceled {
            order_id: OrderId::new("ord-2"),
            occurred_at: Timestamp::parse("2026-03-01T12:00:00Z").unwrap(),
        });
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"CANCELED\""));

        let parsed: OrderEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
