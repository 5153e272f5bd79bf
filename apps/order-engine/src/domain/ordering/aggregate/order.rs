//! Order Aggregate Root
//!
//! The Order aggregate owns the lifecycle state and the derived total.
//! State only changes through the transition methods, each guarded by
//! the state machine; the total only changes through re-derivation.

use serde::{Deserialize, Serialize};

use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::events::{
    OrderCanceled, OrderCreated, OrderEvent, OrderInvalidated, OrderPaid, OrderPaymentEntered,
    OrderShipped,
};
use crate::domain::ordering::services::OrderStateMachine;
use crate::domain::ordering::value_objects::{OrderState, Trigger};
use crate::domain::shared::{
    Money, OrderId, PaymentReference, PaymentTypeCode, ShippingId, Timestamp, UserId,
};

/// Command to create a new order.
///
/// Carries only what the caller may actually choose: state, total and
/// payment id are owned by the engine and never accepted from outside.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Optional order label.
    pub name: Option<String>,
    /// Owning user.
    pub user: UserId,
    /// Chosen payment type.
    pub payment_type: PaymentTypeCode,
}

impl CreateOrderCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if the name is too long or the payment type code
    /// is malformed.
    pub fn validate(&self) -> Result<(), OrderError> {
        if let Some(name) = &self.name {
            if name.len() > Order::MAX_NAME_LEN {
                return Err(OrderError::InvalidParameters {
                    field: "name".to_string(),
                    message: format!("order name cannot exceed {} characters", Order::MAX_NAME_LEN),
                });
            }
        }
        self.payment_type
            .validate()
            .map_err(|e| OrderError::InvalidParameters {
                field: "payment_type".to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

/// Order Aggregate Root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    name: String,
    user: UserId,
    total: Money,
    payment_type: PaymentTypeCode,
    payment_id: Option<PaymentReference>,
    state: OrderState,
    shipping: Option<ShippingId>,
    #[serde(skip)]
    events: Vec<OrderEvent>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Order {
    /// Maximum order name length.
    pub const MAX_NAME_LEN: usize = 50;

    /// Create a new order from a command.
    ///
    /// The state is always `Created` and the total always zero,
    /// regardless of caller input; both are set by the creation
    /// pipeline afterwards. Generates an `OrderCreated` event.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn create(cmd: CreateOrderCommand) -> Result<Self, OrderError> {
        cmd.validate()?;

        let id = OrderId::generate();
        let now = Timestamp::now();

        let mut order = Self {
            id: id.clone(),
            name: cmd.name.unwrap_or_default(),
            user: cmd.user.clone(),
            total: Money::ZERO,
            payment_type: cmd.payment_type.clone(),
            payment_id: None,
            state: OrderState::Created,
            shipping: None,
            events: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        order.events.push(OrderEvent::Created(OrderCreated {
            order_id: id,
            user: cmd.user,
            payment_type: cmd.payment_type,
            occurred_at: now,
        }));

        Ok(order)
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the order ID.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the order label (may be empty).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the owning user.
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }

    /// Get the order total.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Get the payment type.
    #[must_use]
    pub const fn payment_type(&self) -> &PaymentTypeCode {
        &self.payment_type
    }

    /// Get the external payment reference, if payment was initiated.
    #[must_use]
    pub const fn payment_id(&self) -> Option<&PaymentReference> {
        self.payment_id.as_ref()
    }

    /// Get the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> OrderState {
        self.state
    }

    /// Get the shipping reference, if any.
    #[must_use]
    pub const fn shipping(&self) -> Option<&ShippingId> {
        self.shipping.as_ref()
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

    // ========================================================================
    // Derived fields
    // ========================================================================

    /// Set the total from a fresh aggregation over the order's items.
    ///
    /// The total is never incremented in place; callers re-derive it
    /// from the attached rows and write the result here.
    pub fn set_total(&mut self, total: Money) {
        self.total = total;
        self.updated_at = Timestamp::now();
    }

    /// Record the payment reference returned by the payment
    /// collaborator.
    pub fn record_payment(&mut self, payment_id: PaymentReference) {
        self.payment_id = Some(payment_id);
        self.updated_at = Timestamp::now();
    }

    /// Attach a shipping record to the order.
    ///
    /// # Errors
    ///
    /// Returns error if the order is already in a terminal state.
    pub fn assign_shipping(&mut self, shipping: ShippingId) -> Result<(), OrderError> {
        if self.state.is_terminal() {
            return Err(OrderError::InvalidParameters {
                field: "shipping".to_string(),
                message: format!("cannot assign shipping in state {}", self.state),
            });
        }
        self.shipping = Some(shipping);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Mark the order invalid.
    ///
    /// Generates an `OrderInvalidated` event.
    ///
    /// # Errors
    ///
    /// Returns error if the order is not in `Created` or `InPayment`.
    pub fn mark_invalid(&mut self) -> Result<(), OrderError> {
        self.transition(Trigger::MarkInvalid)?;
        self.events.push(OrderEvent::Invalidated(OrderInvalidated {
            order_id: self.id.clone(),
            occurred_at: self.updated_at,
        }));
        Ok(())
    }

    /// Cancel the order.
    ///
    /// Generates an `OrderCanceled` event.
    ///
    /// # Errors
    ///
    /// Returns error if the order is not in `Created`, `InPayment` or
    /// `Paid`.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.transition(Trigger::Cancel)?;
        self.events.push(OrderEvent::Canceled(OrderCanceled {
            order_id: self.id.clone(),
            occurred_at: self.updated_at,
        }));
        Ok(())
    }

    /// Confirm payment.
    ///
    /// Generates an `OrderPaid` event.
    ///
    /// # Errors
    ///
    /// Returns error if the order is not in `Created` or `InPayment`.
    pub fn mark_paid(&mut self) -> Result<(), OrderError> {
        self.transition(Trigger::MarkPaid)?;
        self.events.push(OrderEvent::Paid(OrderPaid {
            order_id: self.id.clone(),
            occurred_at: self.updated_at,
        }));
        Ok(())
    }

    /// Start payment.
    ///
    /// Generates an `OrderPaymentEntered` event carrying the payment
    /// reference, if one was recorded.
    ///
    /// # Errors
    ///
    /// Returns error if the order is not in `Created`.
    pub fn enter_payment(&mut self) -> Result<(), OrderError> {
        self.transition(Trigger::EnterPayment)?;
        self.events
            .push(OrderEvent::PaymentEntered(OrderPaymentEntered {
                order_id: self.id.clone(),
                payment_id: self.payment_id.clone(),
                occurred_at: self.updated_at,
            }));
        Ok(())
    }

    /// Fulfill the order.
    ///
    /// The caller resolves the shipped-at timestamp (supplied or clock
    /// now) and stamps the shipping record in the same atomic unit as
    /// this state change. Generates an `OrderShipped` event.
    ///
    /// # Errors
    ///
    /// Returns error if the order is not `Paid`, or has no shipping
    /// record attached.
    pub fn ship(&mut self, shipped_at: Timestamp) -> Result<(), OrderError> {
        let next = OrderStateMachine::validate(self.state, Trigger::Ship)?;
        if self.shipping.is_none() {
            return Err(OrderError::ShippingRequired {
                order_id: self.id.to_string(),
            });
        }
        self.state = next;
        self.updated_at = Timestamp::now();
        self.events.push(OrderEvent::Shipped(OrderShipped {
            order_id: self.id.clone(),
            shipped_at,
            occurred_at: self.updated_at,
        }));
        Ok(())
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Drain accumulated domain events.
    pub fn drain_events(&mut self) -> Vec<OrderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Get pending events without draining.
    #[must_use]
    pub fn pending_events(&self) -> &[OrderEvent] {
        &self.events
    }

    // ========================================================================
    // Private Helpers
    // ========================================================================

    fn transition(&mut self, trigger: Trigger) -> Result<(), OrderError> {
        let next = OrderStateMachine::validate(self.state, trigger)?;
        self.state = next;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
