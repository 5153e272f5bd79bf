//! Item category entity.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{CategoryId, DomainError, Timestamp};

/// A grouping of catalog items.
///
/// Categories have an independent lifecycle: deleting one leaves the
/// items that referenced it with no category (see the store contract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    id: CategoryId,
    name: String,
    hidden: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ItemCategory {
    /// Maximum category name length.
    pub const MAX_NAME_LEN: usize = 30;

    /// Create a new category.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or too long.
    pub fn new(name: impl Into<String>, hidden: bool) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        let now = Timestamp::now();
        Ok(Self {
            id: CategoryId::generate(),
            name,
            hidden,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get the category id.
    #[must_use]
    pub const fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Get the category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the category is hidden from storefront listings.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide or unhide the category.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        self.updated_at = Timestamp::now();
    }

    /// Rename the category.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or too long.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        self.updated_at = Timestamp::now();
        Ok(())
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
            message: "category name cannot be empty".to_string(),
        });
    }
    if name.len() > ItemCategory::MAX_NAME_LEN {
        return Err(DomainError::InvalidValue {
            field: "name".to_string(),
            message: format!(
                "category name cannot exceed {} characters",
                ItemCategory::MAX_NAME_LEN
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_new() {
        let cat = ItemCategory::new("Accessories", false).unwrap();
        assert_eq!(cat.name(), "Accessories");
        assert!(!cat.is_hidden());
    }

    #[test]
    fn category_rejects_empty_name() {
        assert!(ItemCategory::new("", false).is_err());
    }

    #[test]
    fn category_rejects_long_name() {
        let name = "x".repeat(ItemCategory::MAX_NAME_LEN + 1);
        assert!(ItemCategory::new(name, false).is_err());
    }

    #[test]
    fn category_set_hidden() {
        let mut cat = ItemCategory::new("Sale", false).unwrap();
        cat.set_hidden(true);
        assert!(cat.is_hidden());
    }

    #[test]
    fn category_rename() {
        let mut cat = ItemCategory::new("Sale", false).unwrap();
        cat.rename("Clearance").unwrap();
        assert_eq!(cat.name(), "Clearance");
        assert!(cat.rename("").is_err());
    }
}
