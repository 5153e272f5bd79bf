//! Order item entity.
//!
//! An order item is a single cart line: while its order reference is
//! empty it sits in the user's cart; checkout atomically points it at a
//! freshly created order.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Item;
use crate::domain::ordering::services::line_price;
use crate::domain::shared::{ItemId, Money, OrderId, OrderItemId, Quantity, Timestamp, UserId};

/// A quantity of one catalog item, owned by a user.
///
/// The price is always `quantity x item unit price`, snapshotted at the
/// last save; there is deliberately no way to set it from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    order: Option<OrderId>,
    item: ItemId,
    user: UserId,
    quantity: Quantity,
    price: Money,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl OrderItem {
    /// Create a new cart line for an item.
    ///
    /// The price is computed from the item's current unit price.
    #[must_use]
    pub fn new(item: &Item, user: UserId, quantity: Quantity) -> Self {
        let now = Timestamp::now();
        Self {
            id: OrderItemId::generate(),
            order: None,
            item: item.id().clone(),
            user,
            quantity,
            price: line_price(item.unit_price(), quantity),
            created_at: now,
            updated_at: now,
        }
    }

    /// Get the order item ID.
    #[must_use]
    pub const fn id(&self) -> &OrderItemId {
        &self.id
    }

    /// Get the owning order, if the line has been checked out.
    #[must_use]
    pub const fn order(&self) -> Option<&OrderId> {
        self.order.as_ref()
    }

    /// Get the referenced catalog item.
    #[must_use]
    pub const fn item(&self) -> &ItemId {
        &self.item
    }

    /// Get the owning user.
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Get the snapshotted line price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// True while the line sits in the cart (no order reference).
    #[must_use]
    pub const fn is_in_cart(&self) -> bool {
        self.order.is_none()
    }

    /// Change the quantity, recomputing the price from the item's
    /// current unit price.
    pub fn set_quantity(&mut self, quantity: Quantity, item: &Item) {
        self.quantity = quantity;
        self.reprice(item);
    }

    /// Swap the line to a different catalog item, recomputing the
    /// price.
    pub fn set_item(&mut self, item: &Item) {
        self.item = item.id().clone();
        self.reprice(item);
    }

    /// Attach the line to an order. The consolidation step is the sole
    /// caller.
    pub fn attach_to(&mut self, order: OrderId) {
        self.order = Some(order);
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

    fn reprice(&mut self, item: &Item) {
        self.price = line_price(item.unit_price(), self.quantity);
        self.updated_at = Timestamp::now();
    }
}
