//! Catalog item entity.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{CategoryId, DomainError, ItemId, MediaRef, Money, Timestamp};

/// A purchasable catalog item.
///
/// The unit price here is a live catalog value; order items snapshot it
/// at the moment they are created or updated, so later price changes do
/// not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
    unit_price: Money,
    category: Option<CategoryId>,
    avatar: Option<MediaRef>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Item {
    /// Maximum item name length.
    pub const MAX_NAME_LEN: usize = 50;

    /// Create a new catalog item.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or too long, or the price is
    /// negative.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        unit_price: Money,
        category: Option<CategoryId>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        unit_price.validate_non_negative("unit_price")?;
        let now = Timestamp::now();
        Ok(Self {
            id: ItemId::generate(),
            name,
            description: description.into(),
            unit_price,
            category,
            avatar: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Attach an avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: MediaRef) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Get the item id.
    #[must_use]
    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    /// Get the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the item description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the current unit price.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Get the category reference, if any.
    #[must_use]
    pub const fn category(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }

    /// Get the avatar reference, if any.
    #[must_use]
    pub const fn avatar(&self) -> Option<&MediaRef> {
        self.avatar.as_ref()
    }

    /// Change the unit price.
    ///
    /// Existing order items keep their snapshotted prices.
    ///
    /// # Errors
    ///
    /// Returns error if the price is negative.
    pub fn set_unit_price(&mut self, unit_price: Money) -> Result<(), DomainError> {
        unit_price.validate_non_negative("unit_price")?;
        self.unit_price = unit_price;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Move the item to a different category (or none).
    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.category = category;
        self.updated_at = Timestamp::now();
    }

    /// Drop the category reference. Used when the category is deleted.
    pub fn clear_category(&mut self) {
        self.category = None;
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
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidValue {
            field: "name".to_string(),
            message: "item name cannot be empty".to_string(),
        });
    }
    if name.len() > Item::MAX_NAME_LEN {
        return Err(DomainError::InvalidValue {
            field: "name".to_string(),
            message: format!("item name cannot exceed {} characters", Item::MAX_NAME_LEN),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item() -> Item {
        Item::new("Plug", "A very good plug", Money::from_cents(1000), None).unwrap()
    }

    #[test]
    fn item_new() {
        let item = make_item();
        assert_eq!(item.name(), "Plug");
        assert_eq!(item.unit_price(), Money::from_cents(1000));
        assert!(item.category().is_none());
        assert!(item.avatar().is_none());
    }

    #[test]
    fn item_rejects_negative_price() {
        let result = Item::new("Plug", "", Money::from_major(-1), None);
        assert!(result.is_err());
    }

    #[test]
    fn item_rejects_empty_name() {
        assert!(Item::new("", "", Money::ZERO, None).is_err());
    }

    #[test]
    fn item_set_unit_price() {
        let mut item = make_item();
        item.set_unit_price(Money::from_cents(1500)).unwrap();
        assert_eq!(item.unit_price(), Money::from_cents(1500));
        assert!(item.set_unit_price(Money::from_major(-5)).is_err());
    }

    #[test]
    fn item_clear_category() {
        let category = CategoryId::generate();
        let mut item = Item::new("Plug", "", Money::ZERO, Some(category.clone())).unwrap();
        assert_eq!(item.category(), Some(&category));

        item.clear_category();
        assert!(item.category().is_none());
    }

    #[test]
    fn item_with_avatar() {
        let item = make_item().with_avatar(MediaRef::new("media-1"));
        assert_eq!(item.avatar().unwrap().as_str(), "media-1");
    }

    #[test]
    fn item_serde_roundtrip() {
        let item = make_item();
        let json = serde_json::to_string(&item).unwrap();
        let parsed: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
