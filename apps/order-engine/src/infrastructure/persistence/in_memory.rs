//! In-memory store for testing and development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::application::ports::{
    CategoryFilter, CategorySort, CategorySortField, ItemFilter, ItemSort, ItemSortField,
    OrderFilter, OrderItemFilter, OrderItemSort, OrderItemSortField, OrderSort, OrderSortField,
    SortDirection, Store, StoreError, StoreTx,
};
use crate::domain::catalog::{Item, ItemCategory, PaymentType, Shipping};
use crate::domain::ordering::aggregate::{Order, OrderItem};
use crate::domain::shared::{
    CategoryId, ItemId, Money, OrderId, OrderItemId, PaymentReference, PaymentTypeCode, ShippingId,
    UserId,
};

#[derive(Debug, Clone, Default)]
struct Tables {
    categories: HashMap<String, ItemCategory>,
    items: HashMap<String, Item>,
    payment_types: HashMap<String, PaymentType>,
    shipping: HashMap<String, Shipping>,
    orders: HashMap<String, Order>,
    order_items: HashMap<String, OrderItem>,
}

/// In-memory implementation of [`Store`].
///
/// Suitable for testing and development. Not for production use.
///
/// Transactions take a single global lock and mutate a working copy of
/// the tables; commit swaps the copy in, drop discards it. Writers are
/// fully serialized, which gives the claim step its at-most-one-winner
/// guarantee. Reads block while a transaction is open, so resolve every
/// read you need *before* calling [`Store::begin`] on the same task.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::default())),
        }
    }
}

struct InMemoryTx {
    guard: OwnedMutexGuard<Tables>,
    working: Tables,
}

fn directed(ord: std::cmp::Ordering, direction: SortDirection) -> std::cmp::Ordering {
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

fn sort_categories(rows: &mut [ItemCategory], sort: CategorySort) {
    rows.sort_by(|a, b| {
        let ord = match sort.field {
            CategorySortField::Id => a.id().as_str().cmp(b.id().as_str()),
            CategorySortField::Name => a.name().cmp(b.name()),
            CategorySortField::CreatedAt => a.created_at().cmp(&b.created_at()),
            CategorySortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        };
        directed(
            ord.then_with(|| a.id().as_str().cmp(b.id().as_str())),
            sort.direction,
        )
    });
}

fn sort_items(rows: &mut [Item], sort: ItemSort) {
    rows.sort_by(|a, b| {
        let ord = match sort.field {
            ItemSortField::Id => a.id().as_str().cmp(b.id().as_str()),
            ItemSortField::Name => a.name().cmp(b.name()),
            ItemSortField::Price => a.unit_price().cmp(&b.unit_price()),
            ItemSortField::Category => a
                .category()
                .map(CategoryId::as_str)
                .cmp(&b.category().map(CategoryId::as_str)),
            ItemSortField::CreatedAt => a.created_at().cmp(&b.created_at()),
            ItemSortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        };
        directed(
            ord.then_with(|| a.id().as_str().cmp(b.id().as_str())),
            sort.direction,
        )
    });
}

fn sort_orders(rows: &mut [Order], sort: OrderSort) {
    rows.sort_by(|a, b| {
        let ord = match sort.field {
            OrderSortField::Id => a.id().as_str().cmp(b.id().as_str()),
            OrderSortField::Name => a.name().cmp(b.name()),
            OrderSortField::User => a.user().as_str().cmp(b.user().as_str()),
            OrderSortField::State => a.state().to_string().cmp(&b.state().to_string()),
            OrderSortField::Total => a.total().cmp(&b.total()),
            OrderSortField::PaymentId => a
                .payment_id()
                .map(PaymentReference::as_str)
                .cmp(&b.payment_id().map(PaymentReference::as_str)),
            OrderSortField::CreatedAt => a.created_at().cmp(&b.created_at()),
            OrderSortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        };
        directed(
            ord.then_with(|| a.id().as_str().cmp(b.id().as_str())),
            sort.direction,
        )
    });
}

fn sort_order_items(rows: &mut [OrderItem], sort: OrderItemSort) {
    rows.sort_by(|a, b| {
        let ord = match sort.field {
            OrderItemSortField::Id => a.id().as_str().cmp(b.id().as_str()),
            OrderItemSortField::Order => a
                .order()
                .map(OrderId::as_str)
                .cmp(&b.order().map(OrderId::as_str)),
            OrderItemSortField::User => a.user().as_str().cmp(b.user().as_str()),
            OrderItemSortField::Item => a.item().as_str().cmp(b.item().as_str()),
            OrderItemSortField::Price => a.price().cmp(&b.price()),
            OrderItemSortField::Quantity => a.quantity().cmp(&b.quantity()),
            OrderItemSortField::CreatedAt => a.created_at().cmp(&b.created_at()),
            OrderItemSortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        };
        directed(
            ord.then_with(|| a.id().as_str().cmp(b.id().as_str())),
            sort.direction,
        )
    });
}

fn category_hidden(tables: &Tables, item: &Item) -> Option<bool> {
    item.category()
        .and_then(|id| tables.categories.get(id.as_str()))
        .map(ItemCategory::is_hidden)
}

fn item_category<'a>(tables: &'a Tables, line: &OrderItem) -> Option<&'a CategoryId> {
    tables
        .items
        .get(line.item().as_str())
        .and_then(Item::category)
}

#[async_trait]
impl Store for InMemoryStore {
    async fn begin(&self) -> Result<Box<dyn StoreTx>, StoreError> {
        let guard = Arc::clone(&self.tables).lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(InMemoryTx { guard, working }))
    }

    async fn get_category(&self, id: &CategoryId) -> Result<Option<ItemCategory>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.categories.get(id.as_str()).cloned())
    }

    async fn list_categories(
        &self,
        filter: &CategoryFilter,
        sort: CategorySort,
    ) -> Result<Vec<ItemCategory>, StoreError> {
        let tables = self.tables.lock().await;
        let mut rows: Vec<ItemCategory> = tables
            .categories
            .values()
            .filter(|c| filter.hidden.is_none_or(|hidden| c.is_hidden() == hidden))
            .filter(|c| filter.name.as_deref().is_none_or(|name| c.name() == name))
            .cloned()
            .collect();
        sort_categories(&mut rows, sort);
        Ok(rows)
    }

    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.items.get(id.as_str()).cloned())
    }

    async fn list_items(
        &self,
        filter: &ItemFilter,
        sort: ItemSort,
    ) -> Result<Vec<Item>, StoreError> {
        let tables = self.tables.lock().await;
        let mut rows: Vec<Item> = tables
            .items
            .values()
            .filter(|i| filter.name.as_deref().is_none_or(|name| i.name() == name))
            .filter(|i| filter.price.is_none_or(|price| i.unit_price() == price))
            .filter(|i| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|category| i.category() == Some(category))
            })
            .filter(|i| {
                filter
                    .category_hidden
                    .is_none_or(|hidden| category_hidden(&tables, i) == Some(hidden))
            })
            .cloned()
            .collect();
        sort_items(&mut rows, sort);
        Ok(rows)
    }

    async fn get_payment_type(
        &self,
        code: &PaymentTypeCode,
    ) -> Result<Option<PaymentType>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.payment_types.get(code.as_str()).cloned())
    }

    async fn list_payment_types(&self) -> Result<Vec<PaymentType>, StoreError> {
        let tables = self.tables.lock().await;
        let mut rows: Vec<PaymentType> = tables.payment_types.values().cloned().collect();
        rows.sort_by(|a, b| a.code().as_str().cmp(b.code().as_str()));
        Ok(rows)
    }

    async fn get_shipping(&self, id: &ShippingId) -> Result<Option<Shipping>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.shipping.get(id.as_str()).cloned())
    }

    async fn list_shipping(&self) -> Result<Vec<Shipping>, StoreError> {
        let tables = self.tables.lock().await;
        let mut rows: Vec<Shipping> = tables.shipping.values().cloned().collect();
        rows.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(rows)
    }

    async fn get_order(&self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.orders.get(id.as_str()).cloned())
    }

    async fn list_orders(
        &self,
        filter: &OrderFilter,
        sort: OrderSort,
    ) -> Result<Vec<Order>, StoreError> {
        let tables = self.tables.lock().await;
        let mut rows: Vec<Order> = tables
            .orders
            .values()
            .filter(|o| filter.name.as_deref().is_none_or(|name| o.name() == name))
            .filter(|o| filter.user.as_ref().is_none_or(|user| o.user() == user))
            .filter(|o| filter.state.is_none_or(|state| o.state() == state))
            .filter(|o| filter.total.is_none_or(|total| o.total() == total))
            .filter(|o| {
                filter
                    .payment_type
                    .as_ref()
                    .is_none_or(|pt| o.payment_type() == pt)
            })
            .filter(|o| {
                filter
                    .payment_id
                    .as_ref()
                    .is_none_or(|id| o.payment_id() == Some(id))
            })
            .cloned()
            .collect();
        sort_orders(&mut rows, sort);
        Ok(rows)
    }

    async fn get_order_item(&self, id: &OrderItemId) -> Result<Option<OrderItem>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.order_items.get(id.as_str()).cloned())
    }

    async fn list_order_items(
        &self,
        filter: &OrderItemFilter,
        sort: OrderItemSort,
    ) -> Result<Vec<OrderItem>, StoreError> {
        let tables = self.tables.lock().await;
        let mut rows: Vec<OrderItem> = tables
            .order_items
            .values()
            .filter(|oi| !filter.cart_only || oi.is_in_cart())
            .filter(|oi| {
                filter
                    .order
                    .as_ref()
                    .is_none_or(|order| oi.order() == Some(order))
            })
            .filter(|oi| filter.item.as_ref().is_none_or(|item| oi.item() == item))
            .filter(|oi| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|category| item_category(&tables, oi) == Some(category))
            })
            .filter(|oi| filter.price.is_none_or(|price| oi.price() == price))
            .filter(|oi| filter.user.as_ref().is_none_or(|user| oi.user() == user))
            .filter(|oi| filter.quantity.is_none_or(|qty| oi.quantity() == qty))
            .cloned()
            .collect();
        sort_order_items(&mut rows, sort);
        Ok(rows)
    }
}

impl InMemoryTx {
    fn insert<T: Clone>(
        table: &mut HashMap<String, T>,
        entity: &'static str,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        if table.contains_key(key) {
            return Err(StoreError::Duplicate {
                entity,
                id: key.to_string(),
            });
        }
        table.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn update<T: Clone>(
        table: &mut HashMap<String, T>,
        entity: &'static str,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        if !table.contains_key(key) {
            return Err(StoreError::NotFound {
                entity,
                id: key.to_string(),
            });
        }
        table.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[async_trait]
impl StoreTx for InMemoryTx {
    async fn insert_category(&mut self, category: &ItemCategory) -> Result<(), StoreError> {
        Self::insert(
            &mut self.working.categories,
            "category",
            category.id().as_str(),
            category,
        )
    }

    async fn update_category(&mut self, category: &ItemCategory) -> Result<(), StoreError> {
        Self::update(
            &mut self.working.categories,
            "category",
            category.id().as_str(),
            category,
        )
    }

    async fn delete_category(&mut self, id: &CategoryId) -> Result<(), StoreError> {
        if self.working.categories.remove(id.as_str()).is_none() {
            return Err(StoreError::NotFound {
                entity: "category",
                id: id.to_string(),
            });
        }
        // Nullable relation: referencing items lose the category.
        for item in self.working.items.values_mut() {
            if item.category() == Some(id) {
                item.clear_category();
            }
        }
        Ok(())
    }

    async fn insert_item(&mut self, item: &Item) -> Result<(), StoreError> {
        Self::insert(&mut self.working.items, "item", item.id().as_str(), item)
    }

    async fn update_item(&mut self, item: &Item) -> Result<(), StoreError> {
        Self::update(&mut self.working.items, "item", item.id().as_str(), item)
    }

    async fn insert_payment_type(&mut self, payment_type: &PaymentType) -> Result<(), StoreError> {
        Self::insert(
            &mut self.working.payment_types,
            "payment type",
            payment_type.code().as_str(),
            payment_type,
        )
    }

    async fn insert_shipping(&mut self, shipping: &Shipping) -> Result<(), StoreError> {
        Self::insert(
            &mut self.working.shipping,
            "shipping",
            shipping.id().as_str(),
            shipping,
        )
    }

    async fn update_shipping(&mut self, shipping: &Shipping) -> Result<(), StoreError> {
        Self::update(
            &mut self.working.shipping,
            "shipping",
            shipping.id().as_str(),
            shipping,
        )
    }

    async fn insert_order(&mut self, order: &Order) -> Result<(), StoreError> {
        Self::insert(&mut self.working.orders, "order", order.id().as_str(), order)
    }

    async fn update_order(&mut self, order: &Order) -> Result<(), StoreError> {
        Self::update(&mut self.working.orders, "order", order.id().as_str(), order)
    }

    async fn insert_order_item(&mut self, order_item: &OrderItem) -> Result<(), StoreError> {
        Self::insert(
            &mut self.working.order_items,
            "order item",
            order_item.id().as_str(),
            order_item,
        )
    }

    async fn update_order_item(&mut self, order_item: &OrderItem) -> Result<(), StoreError> {
        Self::update(
            &mut self.working.order_items,
            "order item",
            order_item.id().as_str(),
            order_item,
        )
    }

    async fn claim_cart_items(
        &mut self,
        user: &UserId,
        order: &OrderId,
    ) -> Result<Vec<OrderItem>, StoreError> {
        if !self.working.orders.contains_key(order.as_str()) {
            return Err(StoreError::ConsistencyViolation {
                message: format!("claiming cart items into unknown order {order}"),
            });
        }

        let mut claimed = Vec::new();
        for line in self.working.order_items.values_mut() {
            if line.user() == user && line.is_in_cart() {
                line.attach_to(order.clone());
                claimed.push(line.clone());
            }
        }
        claimed.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(claimed)
    }

    async fn sum_item_prices(&mut self, order: &OrderId) -> Result<Money, StoreError> {
        Ok(self
            .working
            .order_items
            .values()
            .filter(|line| line.order() == Some(order))
            .map(OrderItem::price)
            .sum())
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let InMemoryTx { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Quantity;
    use rust_decimal_macros::dec;

    fn make_item(name: &str, cents: i64) -> Item {
        Item::new(name, "", Money::from_cents(cents), None).unwrap()
    }

    fn make_order(user: &UserId) -> Order {
        use crate::domain::ordering::aggregate::CreateOrderCommand;
        Order::create(CreateOrderCommand {
            name: None,
            user: user.clone(),
            payment_type: PaymentTypeCode::new("CARD"),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn uncommitted_transactions_roll_back() {
        let store = InMemoryStore::new();
        let item = make_item("Plug", 1000);

        {
            let mut tx = store.begin().await.unwrap();
            tx.insert_item(&item).await.unwrap();
            // Dropped without commit.
        }

        assert!(store.get_item(item.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn committed_writes_are_visible() {
        let store = InMemoryStore::new();
        let item = make_item("Plug", 1000);

        let mut tx = store.begin().await.unwrap();
        tx.insert_item(&item).await.unwrap();
        tx.commit().await.unwrap();

        assert!(store.get_item(item.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn insert_rejects_duplicates() {
        let store = InMemoryStore::new();
        let item = make_item("Plug", 1000);

        let mut tx = store.begin().await.unwrap();
        tx.insert_item(&item).await.unwrap();
        let result = tx.insert_item(&item).await;
        assert!(matches!(result, Err(StoreError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn update_requires_existing_row() {
        let store = InMemoryStore::new();
        let item = make_item("Plug", 1000);

        let mut tx = store.begin().await.unwrap();
        let result = tx.update_item(&item).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn claim_cart_items_attaches_only_cart_lines_of_user() {
        let store = InMemoryStore::new();
        let user = UserId::new("usr-1");
        let other = UserId::new("usr-2");
        let item = make_item("Plug", 1000);
        let order = make_order(&user);

        let mine = OrderItem::new(&item, user.clone(), Quantity::ONE);
        let theirs = OrderItem::new(&item, other.clone(), Quantity::ONE);

        let mut tx = store.begin().await.unwrap();
        tx.insert_item(&item).await.unwrap();
        tx.insert_order_item(&mine).await.unwrap();
        tx.insert_order_item(&theirs).await.unwrap();
        tx.insert_order(&order).await.unwrap();

        let claimed = tx.claim_cart_items(&user, order.id()).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(claimed.len(), 1);
        assert_eq!(claimed[0].id(), mine.id());

        let stored_theirs = store.get_order_item(theirs.id()).await.unwrap().unwrap();
        assert!(stored_theirs.is_in_cart());
    }

    #[tokio::test]
    async fn claim_cart_items_skips_already_claimed_lines() {
        let store = InMemoryStore::new();
        let user = UserId::new("usr-1");
        let item = make_item("Plug", 1000);
        let first = make_order(&user);
        let second = make_order(&user);

        let line = OrderItem::new(&item, user.clone(), Quantity::ONE);

        let mut tx = store.begin().await.unwrap();
        tx.insert_item(&item).await.unwrap();
        tx.insert_order_item(&line).await.unwrap();
        tx.insert_order(&first).await.unwrap();
        tx.claim_cart_items(&user, first.id()).await.unwrap();
        tx.commit().await.unwrap();

        let mut tx = store.begin().await.unwrap();
        tx.insert_order(&second).await.unwrap();
        let claimed = tx.claim_cart_items(&user, second.id()).await.unwrap();
        assert!(claimed.is_empty());

        // The line still belongs to the first order.
        drop(tx);
        let stored = store.get_order_item(line.id()).await.unwrap().unwrap();
        assert_eq!(stored.order(), Some(first.id()));
    }

    #[tokio::test]
    async fn claim_cart_items_requires_known_order() {
        let store = InMemoryStore::new();
        let user = UserId::new("usr-1");

        let mut tx = store.begin().await.unwrap();
        let result = tx.claim_cart_items(&user, &OrderId::new("ord-ghost")).await;
        assert!(matches!(
            result,
            Err(StoreError::ConsistencyViolation { .. })
        ));
    }

    #[tokio::test]
    async fn sum_item_prices_is_idempotent_and_zero_for_empty() {
        let store = InMemoryStore::new();
        let user = UserId::new("usr-1");
        let item = make_item("Plug", 1000);
        let order = make_order(&user);

        let mut tx = store.begin().await.unwrap();
        tx.insert_item(&item).await.unwrap();
        tx.insert_order(&order).await.unwrap();

        assert!(tx.sum_item_prices(order.id()).await.unwrap().is_zero());

        let mut a = OrderItem::new(&item, user.clone(), Quantity::new(2).unwrap());
        let mut b = OrderItem::new(&item, user.clone(), Quantity::ONE);
        a.attach_to(order.id().clone());
        b.attach_to(order.id().clone());
        tx.insert_order_item(&a).await.unwrap();
        tx.insert_order_item(&b).await.unwrap();

        let first = tx.sum_item_prices(order.id()).await.unwrap();
        let second = tx.sum_item_prices(order.id()).await.unwrap();
        assert_eq!(first.amount(), dec!(30.00));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn delete_category_nulls_item_references() {
        let store = InMemoryStore::new();
        let category = ItemCategory::new("Accessories", false).unwrap();
        let item = Item::new(
            "Plug",
            "",
            Money::from_cents(1000),
            Some(category.id().clone()),
        )
        .unwrap();

        let mut tx = store.begin().await.unwrap();
        tx.insert_category(&category).await.unwrap();
        tx.insert_item(&item).await.unwrap();
        tx.commit().await.unwrap();

        let mut tx = store.begin().await.unwrap();
        tx.delete_category(category.id()).await.unwrap();
        tx.commit().await.unwrap();

        let stored = store.get_item(item.id()).await.unwrap().unwrap();
        assert!(stored.category().is_none());
    }

    #[tokio::test]
    async fn list_orders_sorts_stably() {
        let store = InMemoryStore::new();
        let user = UserId::new("usr-1");

        let mut orders: Vec<Order> = (0..4).map(|_| make_order(&user)).collect();
        // Same total everywhere, so the id tiebreak decides.
        for order in &mut orders {
            order.set_total(Money::from_cents(1000));
        }

        let mut tx = store.begin().await.unwrap();
        for order in &orders {
            tx.insert_order(order).await.unwrap();
        }
        tx.commit().await.unwrap();

        let by_total = store
            .list_orders(&OrderFilter::default(), OrderSort::asc(OrderSortField::Total))
            .await
            .unwrap();
        let by_total_again = store
            .list_orders(&OrderFilter::default(), OrderSort::asc(OrderSortField::Total))
            .await
            .unwrap();
        let ids: Vec<&str> = by_total.iter().map(|o| o.id().as_str()).collect();
        let ids_again: Vec<&str> = by_total_again.iter().map(|o| o.id().as_str()).collect();
        assert_eq!(ids, ids_again);

        let mut sorted_ids = ids.clone();
        sorted_ids.sort_unstable();
        assert_eq!(ids, sorted_ids);
    }

    #[tokio::test]
    async fn list_order_items_filters_by_order_and_cart() {
        let store = InMemoryStore::new();
        let user = UserId::new("usr-1");
        let item = make_item("Plug", 1000);
        let order = make_order(&user);

        let mut claimed = OrderItem::new(&item, user.clone(), Quantity::ONE);
        claimed.attach_to(order.id().clone());
        let in_cart = OrderItem::new(&item, user.clone(), Quantity::ONE);

        let mut tx = store.begin().await.unwrap();
        tx.insert_item(&item).await.unwrap();
        tx.insert_order(&order).await.unwrap();
        tx.insert_order_item(&claimed).await.unwrap();
        tx.insert_order_item(&in_cart).await.unwrap();
        tx.commit().await.unwrap();

        let cart = store
            .list_order_items(&OrderItemFilter::cart_of(user), OrderItemSort::default())
            .await
            .unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].id(), in_cart.id());

        let attached = store
            .list_order_items(
                &OrderItemFilter {
                    order: Some(order.id().clone()),
                    ..Default::default()
                },
                OrderItemSort::default(),
            )
            .await
            .unwrap();
        assert_eq!(attached.len(), 1);
        assert_eq!(attached[0].id(), claimed.id());
    }

    #[tokio::test]
    async fn list_items_filters_by_hidden_category() {
        let store = InMemoryStore::new();
        let hidden = ItemCategory::new("Hidden", true).unwrap();
        let shown = ItemCategory::new("Shown", false).unwrap();
        let shadowed = Item::new("A", "", Money::ZERO, Some(hidden.id().clone())).unwrap();
        let listed = Item::new("B", "", Money::ZERO, Some(shown.id().clone())).unwrap();
        let uncategorized = Item::new("C", "", Money::ZERO, None).unwrap();

        let mut tx = store.begin().await.unwrap();
        tx.insert_category(&hidden).await.unwrap();
        tx.insert_category(&shown).await.unwrap();
        tx.insert_item(&shadowed).await.unwrap();
        tx.insert_item(&listed).await.unwrap();
        tx.insert_item(&uncategorized).await.unwrap();
        tx.commit().await.unwrap();

        let rows = store
            .list_items(
                &ItemFilter {
                    category_hidden: Some(false),
                    ..Default::default()
                },
                ItemSort::default(),
            )
            .await
            .unwrap();
        // Uncategorized items have no category to join against.
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "B");
    }
}
