//! Transition Order Use Case
//!
//! Applies lifecycle triggers to an order on behalf of an actor. The
//! state machine decides what is legal from the current state; this
//! layer decides what the actor may ask for at all.

use std::sync::Arc;

use crate::application::actor::Actor;
use crate::application::errors::EngineError;
use crate::application::ports::{Clock, Store};
use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::events::OrderEvent;
use crate::domain::ordering::value_objects::Trigger;
use crate::domain::shared::{OrderId, ShippingId, Timestamp};

/// A requested state change.
#[derive(Debug, Clone, Copy)]
pub struct TransitionRequest {
    /// The trigger to fire.
    pub trigger: Trigger,
    /// Shipped-at timestamp for the ship trigger; defaults to the
    /// clock's now. Ignored by every other trigger.
    pub shipped_at: Option<Timestamp>,
}

impl TransitionRequest {
    /// Request a non-ship trigger.
    #[must_use]
    pub const fn trigger(trigger: Trigger) -> Self {
        Self {
            trigger,
            shipped_at: None,
        }
    }

    /// Request the ship trigger with an explicit shipped-at timestamp.
    #[must_use]
    pub const fn ship_at(shipped_at: Timestamp) -> Self {
        Self {
            trigger: Trigger::Ship,
            shipped_at: Some(shipped_at),
        }
    }
}

/// A successfully transitioned order.
#[derive(Debug)]
pub struct TransitionedOrder {
    /// The committed order.
    pub order: Order,
    /// Domain events raised by the transition.
    pub events: Vec<OrderEvent>,
}

/// Use case for driving the order lifecycle.
pub struct TransitionOrderUseCase<S, C>
where
    S: Store,
    C: Clock,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TransitionOrderUseCase<S, C>
where
    S: Store,
    C: Clock,
{
    /// Create a new TransitionOrderUseCase.
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Execute a transition.
    ///
    /// Regular users may only cancel their own orders; staff may fire
    /// any trigger on any order. On failure the persisted state is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unauthorized trigger, and
    /// [`crate::domain::ordering::OrderError::TransitionNotAllowed`]
    /// when the trigger is illegal from the current state.
    pub async fn execute(
        &self,
        actor: &Actor,
        order_id: &OrderId,
        request: TransitionRequest,
    ) -> Result<TransitionedOrder, EngineError> {
        let mut order = self.load_visible(actor, order_id).await?;

        if !actor.is_staff && request.trigger != Trigger::Cancel {
            return Err(EngineError::Validation {
                field: "state",
                message: "you can only change order state to canceled".to_string(),
            });
        }

        // Resolve every read before opening the transaction; writes
        // commit together below.
        let stamped_shipping = match request.trigger {
            Trigger::Ship => {
                let shipped_at = request.shipped_at.unwrap_or_else(|| self.clock.now());
                order.ship(shipped_at)?;
                // ship() guarantees the relation exists.
                let Some(shipping_id) = order.shipping().cloned() else {
                    return Err(EngineError::NotFound {
                        entity: "shipping",
                        id: order_id.to_string(),
                    });
                };
                let mut shipping = self
                    .store
                    .get_shipping(&shipping_id)
                    .await?
                    .ok_or(EngineError::NotFound {
                        entity: "shipping",
                        id: shipping_id.to_string(),
                    })?;
                shipping.set_date(shipped_at);
                Some(shipping)
            }
            Trigger::MarkInvalid => {
                order.mark_invalid()?;
                None
            }
            Trigger::Cancel => {
                order.cancel()?;
                None
            }
            Trigger::MarkPaid => {
                order.mark_paid()?;
                None
            }
            Trigger::EnterPayment => {
                order.enter_payment()?;
                None
            }
        };

        let events = order.drain_events();
        let mut tx = self.store.begin().await?;
        if let Some(shipping) = &stamped_shipping {
            tx.update_shipping(shipping).await?;
        }
        tx.update_order(&order).await?;
        tx.commit().await?;

        tracing::info!(
            order = %order.id(),
            trigger = %request.trigger,
            state = %order.state(),
            "order transitioned"
        );

        Ok(TransitionedOrder { order, events })
    }

    /// Attach a shipping record to an order ahead of fulfillment.
    ///
    /// # Errors
    ///
    /// Returns not-found if the order is invisible to the actor or the
    /// shipping record does not exist, and an error if the order is in
    /// a terminal state.
    pub async fn assign_shipping(
        &self,
        actor: &Actor,
        order_id: &OrderId,
        shipping_id: &ShippingId,
    ) -> Result<Order, EngineError> {
        let mut order = self.load_visible(actor, order_id).await?;

        if self.store.get_shipping(shipping_id).await?.is_none() {
            return Err(EngineError::NotFound {
                entity: "shipping",
                id: shipping_id.to_string(),
            });
        }

        order.assign_shipping(shipping_id.clone())?;

        let mut tx = self.store.begin().await?;
        tx.update_order(&order).await?;
        tx.commit().await?;
        Ok(order)
    }

    /// Load an order, hiding other users' orders from regular users.
    async fn load_visible(&self, actor: &Actor, order_id: &OrderId) -> Result<Order, EngineError> {
        let order = self
            .store
            .get_order(order_id)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "order",
                id: order_id.to_string(),
            })?;
        if !actor.can_act_for(order.user()) {
            return Err(EngineError::NotFound {
                entity: "order",
                id: order_id.to_string(),
            });
        }
        Ok(order)
    }
}
