//! Ordering errors.

use std::fmt;

use super::value_objects::{OrderState, Trigger};

/// Errors that can occur in the order lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// A trigger was requested from a state it is not defined for.
    ///
    /// Signals a caller logic error; the order's persisted state is
    /// left unchanged.
    TransitionNotAllowed {
        /// Current order state.
        from: OrderState,
        /// Requested trigger.
        trigger: Trigger,
    },

    /// The ship trigger requires a shipping record on the order.
    ShippingRequired {
        /// Order ID.
        order_id: String,
    },

    /// Invalid order parameters.
    InvalidParameters {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransitionNotAllowed { from, trigger } => {
                write!(f, "Transition {trigger} not allowed from state {from}")
            }
            Self::ShippingRequired { order_id } => {
                write!(f, "Order {order_id} has no shipping record to fulfill")
            }
            Self::InvalidParameters { field, message } => {
                write!(f, "Invalid order parameter '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for OrderError {}
