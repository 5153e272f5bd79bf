//! Domain Layer
//!
//! The innermost layer containing business logic with zero
//! infrastructure dependencies. This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Events**: Records of state transitions
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`catalog`]: Items, categories, payment types, shipping records
//! - [`ordering`]: Order lifecycle, cart consolidation, totals

pub mod catalog;
pub mod ordering;
pub mod shared;
