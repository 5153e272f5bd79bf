//! Payment type code value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Short stable code identifying a payment type (e.g. "CARD", "COD").
///
/// The code is the payment type's primary identifier and is shared with
/// external callers, so it is caller-supplied rather than generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentTypeCode(String);

impl PaymentTypeCode {
    /// Maximum code length.
    pub const MAX_LEN: usize = 10;

    /// Create a new code.
    ///
    /// The code is normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_uppercase())
    }

    /// Get the code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate the code for use as a payment type id.
    ///
    /// # Errors
    ///
    /// Returns error if the code is empty or longer than [`Self::MAX_LEN`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::InvalidValue {
                field: "payment_type".to_string(),
                message: "code cannot be empty".to_string(),
            });
        }
        if self.0.len() > Self::MAX_LEN {
            return Err(DomainError::InvalidValue {
                field: "payment_type".to_string(),
                message: format!("code cannot exceed {} characters", Self::MAX_LEN),
            });
        }
        Ok(())
    }
}

impl fmt::Display for PaymentTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PaymentTypeCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
