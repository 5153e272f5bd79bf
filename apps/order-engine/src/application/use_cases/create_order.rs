//! Create Order Use Case
//!
//! The checkout orchestrator: validates the request, then — inside one
//! store transaction — persists the order, consolidates the user's cart
//! into it, derives the total, and gives the payment collaborator a
//! chance to start payment. Either every step commits or none do.

use std::sync::Arc;

use crate::application::actor::Actor;
use crate::application::errors::EngineError;
use crate::application::ports::{OrderItemFilter, OrderItemSort, PaymentPort, Store, StoreError};
use crate::domain::ordering::aggregate::{CreateOrderCommand, Order, OrderItem};
use crate::domain::ordering::events::OrderEvent;
use crate::domain::shared::{PaymentTypeCode, UserId};

/// Request to create an order from the caller's cart.
///
/// State, total and payment id are owned by the engine and cannot be
/// supplied here.
#[derive(Debug, Clone, Default)]
pub struct CreateOrderRequest {
    /// Optional order label.
    pub name: Option<String>,
    /// Chosen payment type. Required; validated against the catalog.
    pub payment_type: Option<PaymentTypeCode>,
    /// Order owner. Staff only; ignored for regular users, whose
    /// orders are always their own.
    pub user: Option<UserId>,
}

/// A successfully created order.
#[derive(Debug)]
pub struct CreatedOrder {
    /// The committed order.
    pub order: Order,
    /// The cart lines consolidated into it.
    pub claimed: Vec<OrderItem>,
    /// Domain events raised during creation.
    pub events: Vec<OrderEvent>,
}

/// Use case for creating an order from a user's cart.
pub struct CreateOrderUseCase<S, P>
where
    S: Store,
    P: PaymentPort,
{
    store: Arc<S>,
    payment: Arc<P>,
}

impl<S, P> CreateOrderUseCase<S, P>
where
    S: Store,
    P: PaymentPort,
{
    /// Create a new CreateOrderUseCase.
    pub fn new(store: Arc<S>, payment: Arc<P>) -> Self {
        Self { store, payment }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty cart or a missing or
    /// unknown payment type, and a retryable consistency violation if
    /// a concurrent checkout claims the cart first.
    pub async fn execute(
        &self,
        actor: &Actor,
        request: CreateOrderRequest,
    ) -> Result<CreatedOrder, EngineError> {
        let user = self.resolve_user(actor, request.user);
        let payment_type = self.validate(actor, &user, request.payment_type).await?;

        let mut order = Order::create(CreateOrderCommand {
            name: request.name,
            user: user.clone(),
            payment_type,
        })?;

        let mut tx = self.store.begin().await?;
        tx.insert_order(&order).await?;

        let claimed = tx.claim_cart_items(&user, order.id()).await?;
        if claimed.is_empty() {
            // The cart was non-empty at validation time, so a
            // concurrent checkout won the race. Roll back and let the
            // caller retry against the surviving order.
            return Err(StoreError::ConsistencyViolation {
                message: format!("cart of user {user} was claimed by a concurrent checkout"),
            }
            .into());
        }

        let total = tx.sum_item_prices(order.id()).await?;
        order.set_total(total);

        match self.payment.initiate(&order).await {
            Ok(Some(payment_id)) => {
                order.record_payment(payment_id);
                order.enter_payment()?;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(order = %order.id(), error = %e, "payment initiation failed; order stays CREATED");
            }
        }

        let events = order.drain_events();
        tx.update_order(&order).await?;
        tx.commit().await?;

        tracing::info!(
            order = %order.id(),
            user = %user,
            items = claimed.len(),
            total = %order.total(),
            state = %order.state(),
            "order created"
        );

        Ok(CreatedOrder {
            order,
            claimed,
            events,
        })
    }

    /// Regular users always own their orders; staff may create on
    /// behalf of another user.
    fn resolve_user(&self, actor: &Actor, requested: Option<UserId>) -> UserId {
        if actor.is_staff {
            requested.unwrap_or_else(|| actor.user.clone())
        } else {
            actor.user.clone()
        }
    }

    /// The precondition gate. Runs before any write: an order may not
    /// be created for an empty cart or without a payment type.
    async fn validate(
        &self,
        actor: &Actor,
        user: &UserId,
        payment_type: Option<PaymentTypeCode>,
    ) -> Result<PaymentTypeCode, EngineError> {
        let cart = self
            .store
            .list_order_items(
                &OrderItemFilter::cart_of(user.clone()),
                OrderItemSort::default(),
            )
            .await?;
        if cart.is_empty() {
            return Err(if actor.is_staff {
                EngineError::Validation {
                    field: "name",
                    message: "order cannot be created if user has no items to checkout".to_string(),
                }
            } else {
                EngineError::Validation {
                    field: "user",
                    message: "you have no items to checkout".to_string(),
                }
            });
        }

        let payment_type = payment_type.ok_or(EngineError::Validation {
            field: "payment_type",
            message: "order cannot be created without choosing a payment type".to_string(),
        })?;
        if self
            .store
            .get_payment_type(&payment_type)
            .await?
            .is_none()
        {
            return Err(EngineError::Validation {
                field: "payment_type",
                message: format!("unknown payment type '{payment_type}'"),
            });
        }
        Ok(payment_type)
    }
}
