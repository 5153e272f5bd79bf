//! Dependency Injection Container
//!
//! Manages creation and wiring of all application components.

use std::sync::Arc;

use crate::application::ports::{Clock, NoOpPaymentGateway, PaymentPort, Store, SystemClock};
use crate::application::use_cases::{
    AddToCartUseCase, CreateOrderUseCase, ManageCatalogUseCase, StoreQueries,
    TransitionOrderUseCase,
};
use crate::infrastructure::persistence::InMemoryStore;

/// Dependency injection container.
///
/// Holds all wired collaborators. Use [`Container::new`] with specific
/// implementations, or [`Container::in_memory`] for the default local
/// topology.
pub struct Container<S, P, C>
where
    S: Store + 'static,
    P: PaymentPort + 'static,
    C: Clock + 'static,
{
    store: Arc<S>,
    payment: Arc<P>,
    clock: Arc<C>,
}

impl Container<InMemoryStore, NoOpPaymentGateway, SystemClock> {
    /// In-memory store, no payment backend, system clock.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(NoOpPaymentGateway),
            Arc::new(SystemClock),
        )
    }
}

impl<S, P, C> Container<S, P, C>
where
    S: Store + 'static,
    P: PaymentPort + 'static,
    C: Clock + 'static,
{
    /// Create a new container with all dependencies.
    pub fn new(store: Arc<S>, payment: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            store,
            payment,
            clock,
        }
    }

    /// Get the store.
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Get the payment port.
    pub fn payment(&self) -> Arc<P> {
        Arc::clone(&self.payment)
    }

    /// Get the clock.
    pub fn clock(&self) -> Arc<C> {
        Arc::clone(&self.clock)
    }

    /// Build the order creation use case.
    pub fn create_order(&self) -> CreateOrderUseCase<S, P> {
        CreateOrderUseCase::new(self.store(), self.payment())
    }

    /// Build the order transition use case.
    pub fn transition_order(&self) -> TransitionOrderUseCase<S, C> {
        TransitionOrderUseCase::new(self.store(), self.clock())
    }

    /// Build the cart use case.
    pub fn add_to_cart(&self) -> AddToCartUseCase<S> {
        AddToCartUseCase::new(self.store())
    }

    /// Build the catalog administration use case.
    pub fn manage_catalog(&self) -> ManageCatalogUseCase<S> {
        ManageCatalogUseCase::new(self.store())
    }

    /// Build the read accessors.
    pub fn queries(&self) -> StoreQueries<S> {
        StoreQueries::new(self.store())
    }
}
