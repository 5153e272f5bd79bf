//! Application Ports
//!
//! Interfaces for the collaborators the engine consumes: the
//! transactional store, the payment provider, and a clock. Implemented
//! by adapters in the infrastructure layer (or by test doubles).

mod clock;
mod payment_port;
mod store_port;

pub use clock::{Clock, FixedClock, SystemClock};
pub use payment_port::{NoOpPaymentGateway, PaymentError, PaymentPort, StaticPaymentGateway};
pub use store_port::{
    CategoryFilter, CategorySort, CategorySortField, ItemFilter, ItemSort, ItemSortField,
    OrderFilter, OrderItemFilter, OrderItemSort, OrderItemSortField, OrderSort, OrderSortField,
    Sort, SortDirection, Store, StoreError, StoreTx,
};

#[cfg(test)]
pub use payment_port::MockPaymentPort;
