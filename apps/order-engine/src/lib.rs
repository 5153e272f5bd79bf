// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Engine - Rust Core Library
//!
//! Order-management core for a storefront: users collect cart lines,
//! check them out into orders, and the orders walk a fixed lifecycle
//! (created, in-payment, paid, shipped, with cancel/invalid side
//! exits).
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside -> outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, domain events)
//!   - `catalog`: items, categories, payment types, shipping records
//!   - `ordering`: the Order aggregate, cart lines, the lifecycle
//!     state machine, pricing and total derivation
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: interfaces for external collaborators (`Store`,
//!     `PaymentPort`, `Clock`)
//!   - `use_cases`: `CreateOrder` (the atomic checkout pipeline),
//!     `TransitionOrder`, `AddToCart`, `ManageCatalog`, `StoreQueries`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: in-memory transactional store
//!   - `config`: dependency injection container
//!
//! The HTTP/serialization boundary, authentication, pagination, media
//! storage and the real payment provider live outside this crate and
//! talk to it through the application layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::catalog::{Item, ItemCategory, PaymentType, Shipping};
pub use domain::ordering::{
    CreateOrderCommand, Order, OrderError, OrderEvent, OrderItem, OrderState, OrderStateMachine,
    Trigger,
};
pub use domain::shared::{
    CategoryId, ItemId, Money, OrderId, OrderItemId, PaymentReference, PaymentTypeCode, Quantity,
    ShippingId, Timestamp, UserId,
};

// Application re-exports
pub use application::ports::{
    Clock, FixedClock, NoOpPaymentGateway, PaymentError, PaymentPort, StaticPaymentGateway, Store,
    StoreError, StoreTx, SystemClock,
};
pub use application::use_cases::{
    AddToCartRequest, AddToCartUseCase, CreateOrderRequest, CreateOrderUseCase, CreatedOrder,
    ManageCatalogUseCase, NewItemRequest, StoreQueries, TransitionOrderUseCase, TransitionRequest,
    TransitionedOrder, UpdateCartItemRequest,
};
pub use application::{Actor, EngineError};

// Infrastructure re-exports
pub use infrastructure::config::Container;
pub use infrastructure::persistence::InMemoryStore;
