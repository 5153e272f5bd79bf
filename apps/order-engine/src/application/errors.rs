//! Caller-facing errors for the application layer.

use thiserror::Error;

use crate::application::ports::StoreError;
use crate::domain::ordering::OrderError;

/// Errors returned by use cases.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Request rejected before any write (bad input, empty cart,
    /// unauthorized state change).
    #[error("validation failed on '{field}': {message}")]
    Validation {
        /// Field that failed validation.
        field: &'static str,
        /// Human-readable message.
        message: String,
    },

    /// The actor may not perform this operation at all.
    #[error("forbidden: {message}")]
    Forbidden {
        /// Human-readable message.
        message: String,
    },

    /// Entity not found (or not visible to the actor).
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind.
        entity: &'static str,
        /// Identifier looked up.
        id: String,
    },

    /// Lifecycle error from the order aggregate or state machine.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Persistence error, including retryable checkout conflicts.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    /// True if the caller can retry the request as-is and reasonably
    /// expect it to succeed (checkout conflicts).
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(StoreError::ConsistencyViolation { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordering::value_objects::{OrderState, Trigger};

    #[test]
    fn validation_display() {
        let err = EngineError::Validation {
            field: "payment_type",
            message: "order cannot be created without a payment type".to_string(),
        };
        assert!(format!("{err}").contains("payment_type"));
    }

    #[test]
    fn order_error_passes_through() {
        let err: EngineError = OrderError::TransitionNotAllowed {
            from: OrderState::Shipped,
            trigger: Trigger::Cancel,
        }
        .into();
        assert!(format!("{err}").contains("SHIPPED"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn consistency_violation_is_retryable() {
        let err: EngineError = StoreError::ConsistencyViolation {
            message: "cart claimed concurrently".to_string(),
        }
        .into();
        assert!(err.is_retryable());
    }

    #[test]
    fn not_found_is_not_retryable() {
        let err = EngineError::NotFound {
            entity: "order",
            id: "ord-1".to_string(),
        };
        assert!(!err.is_retryable());
    }
}
