//! Ordering Bounded Context
//!
//! Manages the order lifecycle: cart lines, checkout consolidation,
//! total derivation and the state machine guarding every transition.
//!
//! # Key Concepts
//!
//! - **Cart line**: an [`OrderItem`] with no order reference yet
//! - **Checkout**: atomically binding all of a user's cart lines to a
//!   freshly created [`Order`]
//! - **Transition**: a named, guarded state change, valid only from
//!   specific source states

pub mod aggregate;
pub mod errors;
pub mod events;
pub mod services;
pub mod value_objects;

pub use aggregate::{CreateOrderCommand, Order, OrderItem};
pub use errors::OrderError;
pub use events::OrderEvent;
pub use services::{OrderStateMachine, line_price};
pub use value_objects::{OrderState, Trigger};
