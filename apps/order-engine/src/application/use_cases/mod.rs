//! Application Use Cases
//!
//! Each use case takes the acting caller explicitly and orchestrates
//! domain logic over the store and collaborator ports.

pub mod add_to_cart;
pub mod create_order;
pub mod manage_catalog;
pub mod queries;
pub mod transition_order;

pub use add_to_cart::{AddToCartRequest, AddToCartUseCase, UpdateCartItemRequest};
pub use create_order::{CreateOrderRequest, CreateOrderUseCase, CreatedOrder};
pub use manage_catalog::{ManageCatalogUseCase, NewItemRequest};
pub use queries::StoreQueries;
pub use transition_order::{TransitionOrderUseCase, TransitionRequest, TransitionedOrder};
