//! Payment type entity.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{DomainError, MediaRef, PaymentTypeCode, Timestamp};

/// A way of paying for an order (e.g. card, cash on delivery).
///
/// Identified by its short code rather than a generated id; the code is
/// the value external callers and the payment collaborator see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentType {
    code: PaymentTypeCode,
    name: String,
    description: String,
    avatar: Option<MediaRef>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl PaymentType {
    /// Maximum display name length.
    pub const MAX_NAME_LEN: usize = 25;

    /// Create a new payment type.
    ///
    /// # Errors
    ///
    /// Returns error if the code is invalid or the name is empty or too
    /// long.
    pub fn new(
        code: PaymentTypeCode,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        code.validate()?;
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidValue {
                field: "name".to_string(),
                message: "payment type name cannot be empty".to_string(),
            });
        }
        if name.len() > Self::MAX_NAME_LEN {
            return Err(DomainError::InvalidValue {
                field: "name".to_string(),
                message: format!(
                    "payment type name cannot exceed {} characters",
                    Self::MAX_NAME_LEN
                ),
            });
        }
        let now = Timestamp::now();
        Ok(Self {
            code,
            name,
            description: description.into(),
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

    /// Get the payment type code (primary identifier).
    #[must_use]
    pub const fn code(&self) -> &PaymentTypeCode {
        &self.code
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the avatar reference, if any.
    #[must_use]
    pub const fn avatar(&self) -> Option<&MediaRef> {
        self.avatar.as_ref()
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
