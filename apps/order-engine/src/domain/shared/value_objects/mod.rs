//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod money;
mod payment_type_code;
mod quantity;
mod timestamp;

pub use identifiers::{
    CategoryId, ItemId, MediaRef, OrderId, OrderItemId, PaymentReference, ShippingId, UserId,
};
pub use money::Money;
pub use payment_type_code::PaymentTypeCode;
pub use quantity::Quantity;
pub use timestamp::Timestamp;
