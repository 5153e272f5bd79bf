//! Add To Cart Use Case
//!
//! Creates and updates cart lines. The line price is always derived
//! from `quantity x item unit price` immediately before persistence;
//! any price the caller might supply has nowhere to go.

use std::sync::Arc;

use crate::application::actor::Actor;
use crate::application::errors::EngineError;
use crate::application::ports::Store;
use crate::domain::ordering::aggregate::OrderItem;
use crate::domain::shared::{ItemId, OrderItemId, Quantity, UserId};

/// Request to add an item to a cart.
#[derive(Debug, Clone)]
pub struct AddToCartRequest {
    /// Catalog item to add.
    pub item: ItemId,
    /// Quantity; defaults to one.
    pub quantity: Option<Quantity>,
    /// Cart owner. Staff only; regular users always fill their own
    /// cart.
    pub user: Option<UserId>,
}

/// Request to change an existing cart line.
#[derive(Debug, Clone, Default)]
pub struct UpdateCartItemRequest {
    /// New quantity.
    pub quantity: Option<Quantity>,
    /// Swap to a different catalog item.
    pub item: Option<ItemId>,
}

/// Use case for managing cart lines.
pub struct AddToCartUseCase<S>
where
    S: Store,
{
    store: Arc<S>,
}

impl<S> AddToCartUseCase<S>
where
    S: Store,
{
    /// Create a new AddToCartUseCase.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Add an item to the cart.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the item does not exist.
    pub async fn execute(
        &self,
        actor: &Actor,
        request: AddToCartRequest,
    ) -> Result<OrderItem, EngineError> {
        let user = if actor.is_staff {
            request.user.unwrap_or_else(|| actor.user.clone())
        } else {
            actor.user.clone()
        };

        let item = self
            .store
            .get_item(&request.item)
            .await?
            .ok_or(EngineError::Validation {
                field: "item",
                message: format!("unknown item '{}'", request.item),
            })?;

        let line = OrderItem::new(&item, user, request.quantity.unwrap_or_default());

        let mut tx = self.store.begin().await?;
        tx.insert_order_item(&line).await?;
        tx.commit().await?;

        tracing::info!(
            order_item = %line.id(),
            item = %item.id(),
            quantity = %line.quantity(),
            price = %line.price(),
            "item added to cart"
        );

        Ok(line)
    }

    /// Update an existing line, recomputing its price.
    ///
    /// If the line has already been claimed by an order, the order's
    /// total is re-derived in the same transaction so it keeps matching
    /// the sum of its lines.
    ///
    /// # Errors
    ///
    /// Returns not-found if the line is invisible to the actor, and a
    /// validation error for an unknown replacement item.
    pub async fn update(
        &self,
        actor: &Actor,
        order_item_id: &OrderItemId,
        request: UpdateCartItemRequest,
    ) -> Result<OrderItem, EngineError> {
        let mut line = self
            .store
            .get_order_item(order_item_id)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "order item",
                id: order_item_id.to_string(),
            })?;
        if !actor.can_act_for(line.user()) {
            return Err(EngineError::NotFound {
                entity: "order item",
                id: order_item_id.to_string(),
            });
        }

        let item_id = request.item.unwrap_or_else(|| line.item().clone());
        let item = self
            .store
            .get_item(&item_id)
            .await?
            .ok_or(EngineError::Validation {
                field: "item",
                message: format!("unknown item '{item_id}'"),
            })?;

        let quantity = request.quantity.unwrap_or_else(|| line.quantity());
        if line.item() != item.id() {
            line.set_item(&item);
        }
        line.set_quantity(quantity, &item);

        // Load the owning order (if any) before opening the
        // transaction; its total is re-derived from the updated rows
        // inside it.
        let owning_order = match line.order() {
            Some(order_id) => Some(self.store.get_order(order_id).await?.ok_or(
                EngineError::NotFound {
                    entity: "order",
                    id: order_id.to_string(),
                },
            )?),
            None => None,
        };

        let mut tx = self.store.begin().await?;
        tx.update_order_item(&line).await?;

        if let Some(mut order) = owning_order {
            let total = tx.sum_item_prices(order.id()).await?;
            order.set_total(total);
            tx.update_order(&order).await?;
        }

        tx.commit().await?;
        Ok(line)
    }
}
