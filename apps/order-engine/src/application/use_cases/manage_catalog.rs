//! Manage Catalog Use Case
//!
//! Catalog writes with the storefront's permission tiers: items and
//! categories are staff-managed, payment types admin-managed, shipping
//! records open to any authenticated actor.

use std::sync::Arc;

use crate::application::actor::Actor;
use crate::application::errors::EngineError;
use crate::application::ports::Store;
use crate::domain::catalog::{Item, ItemCategory, PaymentType, Shipping};
use crate::domain::shared::{CategoryId, ItemId, MediaRef, Money, PaymentTypeCode};

/// Request to add a catalog item.
#[derive(Debug, Clone)]
pub struct NewItemRequest {
    /// Item name.
    pub name: String,
    /// Item description.
    pub description: String,
    /// Unit price.
    pub unit_price: Money,
    /// Optional category.
    pub category: Option<CategoryId>,
    /// Optional avatar reference.
    pub avatar: Option<MediaRef>,
}

/// Use case for catalog administration.
pub struct ManageCatalogUseCase<S>
where
    S: Store,
{
    store: Arc<S>,
}

impl<S> ManageCatalogUseCase<S>
where
    S: Store,
{
    /// Create a new ManageCatalogUseCase.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a category. Staff only.
    ///
    /// # Errors
    ///
    /// Returns forbidden for non-staff actors and a validation error
    /// for a bad name.
    pub async fn create_category(
        &self,
        actor: &Actor,
        name: &str,
        hidden: bool,
    ) -> Result<ItemCategory, EngineError> {
        Self::require_staff(actor)?;
        let category = ItemCategory::new(name, hidden).map_err(domain_to_validation)?;

        let mut tx = self.store.begin().await?;
        tx.insert_category(&category).await?;
        tx.commit().await?;
        Ok(category)
    }

    /// Delete a category. Items referencing it keep a null category
    /// reference. Staff only.
    ///
    /// # Errors
    ///
    /// Returns forbidden for non-staff actors, not-found for an
    /// unknown category.
    pub async fn delete_category(&self, actor: &Actor, id: &CategoryId) -> Result<(), EngineError> {
        Self::require_staff(actor)?;

        let mut tx = self.store.begin().await?;
        tx.delete_category(id).await?;
        tx.commit().await?;

        tracing::info!(category = %id, "category deleted; item references cleared");
        Ok(())
    }

    /// Create a catalog item. Staff only.
    ///
    /// # Errors
    ///
    /// Returns forbidden for non-staff actors and a validation error
    /// for bad fields or an unknown category.
    pub async fn create_item(
        &self,
        actor: &Actor,
        request: NewItemRequest,
    ) -> Result<Item, EngineError> {
        Self::require_staff(actor)?;

        if let Some(category) = &request.category {
            if self.store.get_category(category).await?.is_none() {
                return Err(EngineError::Validation {
                    field: "category",
                    message: format!("unknown category '{category}'"),
                });
            }
        }

        let mut item = Item::new(
            request.name,
            request.description,
            request.unit_price,
            request.category,
        )
        .map_err(domain_to_validation)?;
        if let Some(avatar) = request.avatar {
            item = item.with_avatar(avatar);
        }

        let mut tx = self.store.begin().await?;
        tx.insert_item(&item).await?;
        tx.commit().await?;
        Ok(item)
    }

    /// Change an item's unit price. Staff only.
    ///
    /// Existing cart lines and orders keep their snapshotted prices.
    ///
    /// # Errors
    ///
    /// Returns forbidden for non-staff actors, not-found for an
    /// unknown item, and a validation error for a negative price.
    pub async fn update_item_price(
        &self,
        actor: &Actor,
        id: &ItemId,
        unit_price: Money,
    ) -> Result<Item, EngineError> {
        Self::require_staff(actor)?;

        let mut item = self
            .store
            .get_item(id)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "item",
                id: id.to_string(),
            })?;
        item.set_unit_price(unit_price).map_err(domain_to_validation)?;

        let mut tx = self.store.begin().await?;
        tx.update_item(&item).await?;
        tx.commit().await?;
        Ok(item)
    }

    /// Create a payment type. Admin only.
    ///
    /// # Errors
    ///
    /// Returns forbidden for non-admin actors and a validation error
    /// for a bad code or name.
    pub async fn create_payment_type(
        &self,
        actor: &Actor,
        code: PaymentTypeCode,
        name: &str,
        description: &str,
    ) -> Result<PaymentType, EngineError> {
        if !actor.is_admin {
            return Err(EngineError::Forbidden {
                message: "admin required to manage payment types".to_string(),
            });
        }

        let payment_type =
            PaymentType::new(code, name, description).map_err(domain_to_validation)?;

        let mut tx = self.store.begin().await?;
        tx.insert_payment_type(&payment_type).await?;
        tx.commit().await?;
        Ok(payment_type)
    }

    /// Create a shipping record.
    ///
    /// Any authenticated actor may create one; the fee is only honored
    /// for staff and defaults to zero otherwise.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty address or negative
    /// fee.
    pub async fn create_shipping(
        &self,
        actor: &Actor,
        address: &str,
        fee: Money,
    ) -> Result<Shipping, EngineError> {
        let fee = if actor.is_staff { fee } else { Money::ZERO };
        let shipping = Shipping::new(address, fee).map_err(domain_to_validation)?;

        let mut tx = self.store.begin().await?;
        tx.insert_shipping(&shipping).await?;
        tx.commit().await?;
        Ok(shipping)
    }

    fn require_staff(actor: &Actor) -> Result<(), EngineError> {
        if actor.is_staff {
            Ok(())
        } else {
            Err(EngineError::Forbidden {
                message: "staff required to manage the catalog".to_string(),
            })
        }
    }
}

fn domain_to_validation(e: crate::domain::shared::DomainError) -> EngineError {
    EngineError::Validation {
        field: "catalog",
        message: e.to_string(),
    }
}
