//! Ordering Domain Services

pub mod pricing;
mod state_machine;

pub use pricing::line_price;
pub use state_machine::OrderStateMachine;
