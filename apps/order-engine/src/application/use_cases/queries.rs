//! Store Queries
//!
//! The read surface handed to the excluded transport layer: filtered,
//! stably ordered listings per entity. Regular users only ever see
//! their own orders and order items; catalog reads are open to any
//! authenticated actor.

use std::sync::Arc;

use crate::application::actor::Actor;
use crate::application::errors::EngineError;
use crate::application::ports::{
    CategoryFilter, CategorySort, ItemFilter, ItemSort, OrderFilter, OrderItemFilter,
    OrderItemSort, OrderSort, Store,
};
use crate::domain::catalog::{Item, ItemCategory, PaymentType, Shipping};
use crate::domain::ordering::aggregate::{Order, OrderItem};
use crate::domain::shared::{OrderId, OrderItemId};

/// Read accessors over the store.
pub struct StoreQueries<S>
where
    S: Store,
{
    store: Arc<S>,
}

impl<S> StoreQueries<S>
where
    S: Store,
{
    /// Create new StoreQueries.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List categories.
    pub async fn list_categories(
        &self,
        filter: &CategoryFilter,
        sort: CategorySort,
    ) -> Result<Vec<ItemCategory>, EngineError> {
        Ok(self.store.list_categories(filter, sort).await?)
    }

    /// List items.
    pub async fn list_items(
        &self,
        filter: &ItemFilter,
        sort: ItemSort,
    ) -> Result<Vec<Item>, EngineError> {
        Ok(self.store.list_items(filter, sort).await?)
    }

    /// List payment types.
    pub async fn list_payment_types(&self) -> Result<Vec<PaymentType>, EngineError> {
        Ok(self.store.list_payment_types().await?)
    }

    /// List shipping records.
    pub async fn list_shipping(&self) -> Result<Vec<Shipping>, EngineError> {
        Ok(self.store.list_shipping().await?)
    }

    /// Get one order, scoped to the actor.
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown id or another user's order.
    pub async fn get_order(&self, actor: &Actor, id: &OrderId) -> Result<Order, EngineError> {
        let order = self
            .store
            .get_order(id)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "order",
                id: id.to_string(),
            })?;
        if !actor.can_act_for(order.user()) {
            return Err(EngineError::NotFound {
                entity: "order",
                id: id.to_string(),
            });
        }
        Ok(order)
    }

    /// List orders, scoped to the actor for regular users.
    pub async fn list_orders(
        &self,
        actor: &Actor,
        filter: &OrderFilter,
        sort: OrderSort,
    ) -> Result<Vec<Order>, EngineError> {
        let scoped;
        let filter = if actor.is_staff {
            filter
        } else {
            scoped = OrderFilter {
                user: Some(actor.user.clone()),
                ..filter.clone()
            };
            &scoped
        };
        Ok(self.store.list_orders(filter, sort).await?)
    }

    /// Get one order item, scoped to the actor.
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown id or another user's line.
    pub async fn get_order_item(
        &self,
        actor: &Actor,
        id: &OrderItemId,
    ) -> Result<OrderItem, EngineError> {
        let line = self
            .store
            .get_order_item(id)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "order item",
                id: id.to_string(),
            })?;
        if !actor.can_act_for(line.user()) {
            return Err(EngineError::NotFound {
                entity: "order item",
                id: id.to_string(),
            });
        }
        Ok(line)
    }

    /// List order items, scoped to the actor for regular users.
    pub async fn list_order_items(
        &self,
        actor: &Actor,
        filter: &OrderItemFilter,
        sort: OrderItemSort,
    ) -> Result<Vec<OrderItem>, EngineError> {
        let scoped;
        let filter = if actor.is_staff {
            filter
        } else {
            scoped = OrderItemFilter {
                user: Some(actor.user.clone()),
                ..filter.clone()
            };
            &scoped
        };
        Ok(self.store.list_order_items(filter, sort).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        CategorySortField, NoOpPaymentGateway, OrderItemSortField, SortDirection,
    };
    use crate::application::use_cases::create_order::{CreateOrderRequest, CreateOrderUseCase};
    use crate::domain::ordering::aggregate::OrderItem;
    use crate::domain::shared::{Money, PaymentTypeCode, Quantity, UserId};
    use crate::infrastructure::persistence::InMemoryStore;

    async fn seeded() -> (Arc<InMemoryStore>, StoreQueries<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let mut tx = store.begin().await.unwrap();

        let visible = ItemCategory::new("Visible", false).unwrap();
        let hidden = ItemCategory::new("Hidden", true).unwrap();
        tx.insert_category(&visible).await.unwrap();
        tx.insert_category(&hidden).await.unwrap();

        let plug = Item::new("Plug", "", Money::from_cents(1000), Some(visible.id().clone()))
            .unwrap();
        let cable = Item::new("Cable", "", Money::from_cents(500), Some(hidden.id().clone()))
            .unwrap();
        tx.insert_item(&plug).await.unwrap();
        tx.insert_item(&cable).await.unwrap();

        let card = PaymentType::new(PaymentTypeCode::new("CARD"), "Credit card", "").unwrap();
        tx.insert_payment_type(&card).await.unwrap();

        for user in ["usr-1", "usr-2"] {
            let line = OrderItem::new(&plug, UserId::new(user), Quantity::ONE);
            tx.insert_order_item(&line).await.unwrap();
        }
        tx.commit().await.unwrap();

        let queries = StoreQueries::new(Arc::clone(&store));
        (store, queries)
    }

    #[tokio::test]
    async fn categories_filter_by_hidden_and_sort_by_name() {
        let (_store, queries) = seeded().await;

        let hidden = queries
            .list_categories(
                &CategoryFilter {
                    hidden: Some(true),
                    ..Default::default()
                },
                CategorySort::default(),
            )
            .await
            .unwrap();
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].name(), "Hidden");

        let all = queries
            .list_categories(
                &CategoryFilter::default(),
                CategorySort::desc(CategorySortField::Name),
            )
            .await
            .unwrap();
        assert_eq!(all[0].name(), "Visible");
        assert_eq!(all[1].name(), "Hidden");
    }

    #[tokio::test]
    async fn items_filter_by_category_hidden() {
        let (_store, queries) = seeded().await;

        let visible_items = queries
            .list_items(
                &ItemFilter {
                    category_hidden: Some(false),
                    ..Default::default()
                },
                ItemSort::default(),
            )
            .await
            .unwrap();
        assert_eq!(visible_items.len(), 1);
        assert_eq!(visible_items[0].name(), "Plug");
    }

    #[tokio::test]
    async fn order_items_are_scoped_for_regular_users() {
        let (_store, queries) = seeded().await;

        let mine = queries
            .list_order_items(
                &Actor::user(UserId::new("usr-1")),
                &OrderItemFilter::default(),
                OrderItemSort::default(),
            )
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user().as_str(), "usr-1");

        let all = queries
            .list_order_items(
                &Actor::staff(UserId::new("staff-1")),
                &OrderItemFilter::default(),
                OrderItemSort {
                    field: OrderItemSortField::User,
                    direction: SortDirection::Asc,
                },
            )
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn orders_are_scoped_for_regular_users() {
        let (store, queries) = seeded().await;

        let create = CreateOrderUseCase::new(Arc::clone(&store), Arc::new(NoOpPaymentGateway));
        let request = CreateOrderRequest {
            name: None,
            payment_type: Some(PaymentTypeCode::new("CARD")),
            user: None,
        };
        let mine = create
            .execute(&Actor::user(UserId::new("usr-1")), request.clone())
            .await
            .unwrap();
        let theirs = create
            .execute(&Actor::user(UserId::new("usr-2")), request)
            .await
            .unwrap();

        let visible = queries
            .list_orders(
                &Actor::user(UserId::new("usr-1")),
                &OrderFilter::default(),
                OrderSort::default(),
            )
            .await
            .unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), mine.order.id());

        // Direct lookup of another user's order reads as missing.
        let result = queries
            .get_order(&Actor::user(UserId::new("usr-1")), theirs.order.id())
            .await;
        assert!(matches!(result, Err(EngineError::NotFound { .. })));

        let staff_view = queries
            .list_orders(
                &Actor::staff(UserId::new("staff-1")),
                &OrderFilter::default(),
                OrderSort::default(),
            )
            .await
            .unwrap();
        assert_eq!(staff_view.len(), 2);
    }

    #[tokio::test]
    async fn payment_types_and_shipping_listings() {
        let (store, queries) = seeded().await;

        let types = queries.list_payment_types().await.unwrap();
        assert_eq!(types.len(), 1);

        let shipping = Shipping::new("1 Main St", Money::ZERO).unwrap();
        let mut tx = store.begin().await.unwrap();
        tx.insert_shipping(&shipping).await.unwrap();
        tx.commit().await.unwrap();

        let records = queries.list_shipping().await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
