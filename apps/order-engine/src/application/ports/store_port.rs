//! Persistent Store Port
//!
//! Abstraction over the transactional store the engine runs against.
//! Reads go through the store directly; every mutation happens inside a
//! [`StoreTx`] so the creation pipeline and the ship transition commit
//! as single atomic units. Dropping a transaction without committing
//! discards all of its writes.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{Item, ItemCategory, PaymentType, Shipping};
use crate::domain::ordering::aggregate::{Order, OrderItem};
use crate::domain::ordering::value_objects::OrderState;
use crate::domain::shared::{
    CategoryId, ItemId, Money, OrderId, OrderItemId, PaymentReference, PaymentTypeCode, Quantity,
    ShippingId, UserId,
};

/// Errors surfaced by store implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Entity not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind.
        entity: &'static str,
        /// Identifier looked up.
        id: String,
    },

    /// Insert collided with an existing row.
    #[error("{entity} already exists: {id}")]
    Duplicate {
        /// Entity kind.
        entity: &'static str,
        /// Conflicting identifier.
        id: String,
    },

    /// Observed state inconsistent with an invariant (e.g. a cart item
    /// claimed by a concurrent checkout). The enclosing transaction is
    /// rolled back; the caller may retry.
    #[error("consistency violation: {message}")]
    ConsistencyViolation {
        /// What was observed.
        message: String,
    },
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// A sort over a declared sortable field. Ordering is stable: rows that
/// compare equal on the field are tie-broken by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort<F> {
    /// Field to sort by.
    pub field: F,
    /// Direction.
    pub direction: SortDirection,
}

impl<F> Sort<F> {
    /// Sort by a field, ascending.
    pub const fn asc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Sort by a field, descending.
    pub const fn desc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

// ============================================================================
// Filters and sortable fields, per entity
// ============================================================================

/// Filter for category listings.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    /// Match the hidden flag.
    pub hidden: Option<bool>,
    /// Match the exact name.
    pub name: Option<String>,
}

/// Sortable category fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategorySortField {
    /// By id (the default).
    #[default]
    Id,
    /// By name.
    Name,
    /// By creation time.
    CreatedAt,
    /// By last update time.
    UpdatedAt,
}

/// Sort specification for category listings.
pub type CategorySort = Sort<CategorySortField>;

/// Filter for item listings.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Match the exact name.
    pub name: Option<String>,
    /// Match the exact unit price.
    pub price: Option<Money>,
    /// Match the category reference.
    pub category: Option<CategoryId>,
    /// Match the hidden flag of the item's category.
    pub category_hidden: Option<bool>,
}

/// Sortable item fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemSortField {
    /// By id (the default).
    #[default]
    Id,
    /// By name.
    Name,
    /// By unit price.
    Price,
    /// By category reference.
    Category,
    /// By creation time.
    CreatedAt,
    /// By last update time.
    UpdatedAt,
}

/// Sort specification for item listings.
pub type ItemSort = Sort<ItemSortField>;

/// Filter for order listings.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Match the exact label.
    pub name: Option<String>,
    /// Match the owning user.
    pub user: Option<UserId>,
    /// Match the lifecycle state.
    pub state: Option<OrderState>,
    /// Match the exact total.
    pub total: Option<Money>,
    /// Match the payment type.
    pub payment_type: Option<PaymentTypeCode>,
    /// Match the external payment reference.
    pub payment_id: Option<PaymentReference>,
}

/// Sortable order fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderSortField {
    /// By id (the default).
    #[default]
    Id,
    /// By label.
    Name,
    /// By owning user.
    User,
    /// By lifecycle state.
    State,
    /// By total.
    Total,
    /// By payment reference.
    PaymentId,
    /// By creation time.
    CreatedAt,
    /// By last update time.
    UpdatedAt,
}

/// Sort specification for order listings.
pub type OrderSort = Sort<OrderSortField>;

/// Filter for order item listings.
#[derive(Debug, Clone, Default)]
pub struct OrderItemFilter {
    /// Match the owning order.
    pub order: Option<OrderId>,
    /// Only cart lines (no order reference yet).
    pub cart_only: bool,
    /// Match the referenced catalog item.
    pub item: Option<ItemId>,
    /// Match the referenced item's category.
    pub category: Option<CategoryId>,
    /// Match the exact line price.
    pub price: Option<Money>,
    /// Match the owning user.
    pub user: Option<UserId>,
    /// Match the quantity.
    pub quantity: Option<Quantity>,
}

impl OrderItemFilter {
    /// The cart of one user: their lines with no order reference.
    #[must_use]
    pub fn cart_of(user: UserId) -> Self {
        Self {
            cart_only: true,
            user: Some(user),
            ..Self::default()
        }
    }
}

/// Sortable order item fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderItemSortField {
    /// By id (the default).
    #[default]
    Id,
    /// By owning order.
    Order,
    /// By owning user.
    User,
    /// By referenced item.
    Item,
    /// By line price.
    Price,
    /// By quantity.
    Quantity,
    /// By creation time.
    CreatedAt,
    /// By last update time.
    UpdatedAt,
}

/// Sort specification for order item listings.
pub type OrderItemSort = Sort<OrderItemSortField>;

// ============================================================================
// Store traits
// ============================================================================

/// The persistent store collaborator.
///
/// Reads see committed state only. All writes go through [`Self::begin`].
#[async_trait]
pub trait Store: Send + Sync {
    /// Open a transaction.
    async fn begin(&self) -> Result<Box<dyn StoreTx>, StoreError>;

    /// Find a category by id.
    async fn get_category(&self, id: &CategoryId) -> Result<Option<ItemCategory>, StoreError>;

    /// List categories matching a filter, in a stable order.
    async fn list_categories(
        &self,
        filter: &CategoryFilter,
        sort: CategorySort,
    ) -> Result<Vec<ItemCategory>, StoreError>;

    /// Find an item by id.
    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>, StoreError>;

    /// List items matching a filter, in a stable order.
    async fn list_items(
        &self,
        filter: &ItemFilter,
        sort: ItemSort,
    ) -> Result<Vec<Item>, StoreError>;

    /// Find a payment type by code.
    async fn get_payment_type(
        &self,
        code: &PaymentTypeCode,
    ) -> Result<Option<PaymentType>, StoreError>;

    /// List all payment types, ordered by code.
    async fn list_payment_types(&self) -> Result<Vec<PaymentType>, StoreError>;

    /// Find a shipping record by id.
    async fn get_shipping(&self, id: &ShippingId) -> Result<Option<Shipping>, StoreError>;

    /// List all shipping records, ordered by id.
    async fn list_shipping(&self) -> Result<Vec<Shipping>, StoreError>;

    /// Find an order by id.
    async fn get_order(&self, id: &OrderId) -> Result<Option<Order>, StoreError>;

    /// List orders matching a filter, in a stable order.
    async fn list_orders(
        &self,
        filter: &OrderFilter,
        sort: OrderSort,
    ) -> Result<Vec<Order>, StoreError>;

    /// Find an order item by id.
    async fn get_order_item(&self, id: &OrderItemId) -> Result<Option<OrderItem>, StoreError>;

    /// List order items matching a filter, in a stable order.
    async fn list_order_items(
        &self,
        filter: &OrderItemFilter,
        sort: OrderItemSort,
    ) -> Result<Vec<OrderItem>, StoreError>;
}

/// A store transaction.
///
/// Writes are buffered until [`Self::commit`]; dropping the transaction
/// rolls everything back. Isolation is at least read-committed, with
/// conflict detection on the claim step.
#[async_trait]
pub trait StoreTx: Send {
    /// Insert a category.
    async fn insert_category(&mut self, category: &ItemCategory) -> Result<(), StoreError>;

    /// Update a category.
    async fn update_category(&mut self, category: &ItemCategory) -> Result<(), StoreError>;

    /// Delete a category. Items referencing it keep a null category
    /// reference.
    async fn delete_category(&mut self, id: &CategoryId) -> Result<(), StoreError>;

    /// Insert an item.
    async fn insert_item(&mut self, item: &Item) -> Result<(), StoreError>;

    /// Update an item.
    async fn update_item(&mut self, item: &Item) -> Result<(), StoreError>;

    /// Insert a payment type.
    async fn insert_payment_type(&mut self, payment_type: &PaymentType) -> Result<(), StoreError>;

    /// Insert a shipping record.
    async fn insert_shipping(&mut self, shipping: &Shipping) -> Result<(), StoreError>;

    /// Update a shipping record.
    async fn update_shipping(&mut self, shipping: &Shipping) -> Result<(), StoreError>;

    /// Insert an order.
    async fn insert_order(&mut self, order: &Order) -> Result<(), StoreError>;

    /// Update an order.
    async fn update_order(&mut self, order: &Order) -> Result<(), StoreError>;

    /// Insert an order item.
    async fn insert_order_item(&mut self, order_item: &OrderItem) -> Result<(), StoreError>;

    /// Update an order item.
    async fn update_order_item(&mut self, order_item: &OrderItem) -> Result<(), StoreError>;

    /// Atomically attach every cart line of `user` to `order` and
    /// return the claimed lines. A line that is concurrently claimed by
    /// another order is never claimed twice; at most one checkout wins
    /// each line.
    async fn claim_cart_items(
        &mut self,
        user: &UserId,
        order: &OrderId,
    ) -> Result<Vec<OrderItem>, StoreError>;

    /// Sum the line prices of every order item attached to `order`.
    /// An empty set sums to zero.
    async fn sum_item_prices(&mut self, order: &OrderId) -> Result<Money, StoreError>;

    /// Commit all buffered writes.
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_id_asc() {
        let sort = OrderSort::default();
        assert_eq!(sort.field, OrderSortField::Id);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn sort_constructors() {
        let sort = ItemSort::desc(ItemSortField::Price);
        assert_eq!(sort.field, ItemSortField::Price);
        assert_eq!(sort.direction, SortDirection::Desc);

        let sort = CategorySort::asc(CategorySortField::Name);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn cart_of_filter() {
        let user = UserId::new("usr-1");
        let filter = OrderItemFilter::cart_of(user.clone());
        assert!(filter.cart_only);
        assert_eq!(filter.user, Some(user));
        assert!(filter.order.is_none());
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::ConsistencyViolation {
            message: "cart item oi-1 already claimed".to_string(),
        };
        assert!(format!("{err}").contains("oi-1"));

        let err = StoreError::NotFound {
            entity: "order",
            id: "ord-1".to_string(),
        };
        assert!(format!("{err}").contains("order"));
    }
}
