//! Payment Collaborator Port

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ordering::aggregate::Order;
use crate::domain::shared::PaymentReference;

/// Errors from the payment collaborator.
///
/// These never fail order creation: the orchestrator degrades to "no
/// payment id, order stays CREATED" and the user keeps their claimed
/// cart items.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The provider could not be reached or rejected the request.
    #[error("payment provider unavailable: {0}")]
    Unavailable(String),
}

/// Port to the external payment collaborator.
///
/// Timeout and retry policy belong to the implementation, not the
/// engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentPort: Send + Sync {
    /// Initiate payment for an order.
    ///
    /// Returns `Ok(Some(reference))` when the provider accepted the
    /// payment, `Ok(None)` when no payment backend is configured.
    ///
    /// # Errors
    ///
    /// Returns error if the provider failed; the caller degrades
    /// rather than propagating.
    async fn initiate(&self, order: &Order) -> Result<Option<PaymentReference>, PaymentError>;
}

/// Payment gateway for deployments without a payment backend.
///
/// Always reports "no payment", leaving new orders in their created
/// state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpPaymentGateway;

#[async_trait]
impl PaymentPort for NoOpPaymentGateway {
    async fn initiate(&self, _order: &Order) -> Result<Option<PaymentReference>, PaymentError> {
        Ok(None)
    }
}

/// Payment gateway that hands out a fixed reference. For tests and
/// local development.
#[derive(Debug, Clone)]
pub struct StaticPaymentGateway {
    reference: PaymentReference,
}

impl StaticPaymentGateway {
    /// Create a gateway that always returns `reference`.
    #[must_use]
    pub const fn new(reference: PaymentReference) -> Self {
        Self { reference }
    }
}

#[async_trait]
impl PaymentPort for StaticPaymentGateway {
    async fn initiate(&self, _order: &Order) -> Result<Option<PaymentReference>, PaymentError> {
        Ok(Some(self.reference.clone()))
    }
}
