//! Order State Machine Service
//!
//! Validates lifecycle transitions against a fixed transition table.

use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::value_objects::{OrderState, Trigger};

/// Order state machine for validating transitions.
///
/// The full table:
///
/// | Trigger        | Valid source states        | Target     |
/// |----------------|----------------------------|------------|
/// | `MarkInvalid`  | Created, InPayment         | Invalid    |
/// | `Cancel`       | Created, InPayment, Paid   | Canceled   |
/// | `MarkPaid`     | Created, InPayment         | Paid       |
/// | `EnterPayment` | Created                    | InPayment  |
/// | `Ship`         | Paid                       | Shipped    |
///
/// Any (state, trigger) pair outside the table is rejected.
pub struct OrderStateMachine;

impl OrderStateMachine {
    /// Look up the target state for a trigger, if it is defined for the
    /// given source state.
    #[must_use]
    pub const fn target(from: OrderState, trigger: Trigger) -> Option<OrderState> {
        match (from, trigger) {
            (OrderState::Created | OrderState::InPayment, Trigger::MarkInvalid) => {
                Some(OrderState::Invalid)
            }
            (
                OrderState::Created | OrderState::InPayment | OrderState::Paid,
                Trigger::Cancel,
            ) => Some(OrderState::Canceled),
            (OrderState::Created | OrderState::InPayment, Trigger::MarkPaid) => {
                Some(OrderState::Paid)
            }
            (OrderState::Created, Trigger::EnterPayment) => Some(OrderState::InPayment),
            (OrderState::Paid, Trigger::Ship) => Some(OrderState::Shipped),
            _ => None,
        }
    }

    /// Check if a trigger is valid from a given state.
    #[must_use]
    pub const fn is_valid(from: OrderState, trigger: Trigger) -> bool {
        Self::target(from, trigger).is_some()
    }

    /// Validate a trigger and return the target state.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::TransitionNotAllowed`] if the trigger is
    /// not defined for the source state.
    pub fn validate(from: OrderState, trigger: Trigger) -> Result<OrderState, OrderError> {
        Self::target(from, trigger).ok_or(OrderError::TransitionNotAllowed { from, trigger })
    }

    /// Get all triggers valid from a given state.
    #[must_use]
    pub fn valid_triggers(from: OrderState) -> Vec<Trigger> {
        Trigger::ALL
            .into_iter()
            .filter(|trigger| Self::is_valid(from, *trigger))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(OrderState::Created, Trigger::MarkInvalid => Some(OrderState::Invalid); "created mark invalid")]
    #[test_case(OrderState::Created, Trigger::Cancel => Some(OrderState::Canceled); "created cancel")]
    #[test_case(OrderState::Created, Trigger::MarkPaid => Some(OrderState::Paid); "created mark paid")]
    #[test_case(OrderState::Created, Trigger::EnterPayment => Some(OrderState::InPayment); "created enter payment")]
    #[test_case(OrderState::Created, Trigger::Ship => None; "created ship rejected")]
    #[test_case(OrderState::InPayment, Trigger::MarkInvalid => Some(OrderState::Invalid); "in payment mark invalid")]
    #[test_case(OrderState::InPayment, Trigger::Cancel => Some(OrderState::Canceled); "in payment cancel")]
    #[test_case(OrderState::InPayment, Trigger::MarkPaid => Some(OrderState::Paid); "in payment mark paid")]
    #[test_case(OrderState::InPayment, Trigger::EnterPayment => None; "in payment enter payment rejected")]
    #[test_case(OrderState::InPayment, Trigger::Ship => None; "in payment ship rejected")]
    #[test_case(OrderState::Paid, Trigger::MarkInvalid => None; "paid mark invalid rejected")]
    #[test_case(OrderState::Paid, Trigger::Cancel => Some(OrderState::Canceled); "paid cancel")]
    #[test_case(OrderState::Paid, Trigger::MarkPaid => None; "paid mark paid rejected")]
    #[test_case(OrderState::Paid, Trigger::EnterPayment => None; "paid enter payment rejected")]
    #[test_case(OrderState::Paid, Trigger::Ship => Some(OrderState::Shipped); "paid ship")]
    fn transition_table(from: OrderState, trigger: Trigger) -> Option<OrderState> {
        OrderStateMachine::target(from, trigger)
    }

    #[test]
    fn no_transitions_from_terminal_states() {
        for terminal in [OrderState::Shipped, OrderState::Canceled, OrderState::Invalid] {
            assert!(OrderStateMachine::valid_triggers(terminal).is_empty());
        }
    }

    #[test]
    fn validate_returns_error_for_invalid() {
        let result = OrderStateMachine::validate(OrderState::Shipped, Trigger::MarkPaid);
        assert_eq!(
            result,
            Err(OrderError::TransitionNotAllowed {
                from: OrderState::Shipped,
                trigger: Trigger::MarkPaid,
            })
        );
    }

    #[test]
    fn validate_returns_target_for_valid() {
        let target = OrderStateMachine::validate(OrderState::Created, Trigger::EnterPayment);
        assert_eq!(target, Ok(OrderState::InPayment));
    }

    #[test]
    fn valid_triggers_from_created() {
        let triggers = OrderStateMachine::valid_triggers(OrderState::Created);
        assert!(triggers.contains(&Trigger::MarkInvalid));
        assert!(triggers.contains(&Trigger::Cancel));
        assert!(triggers.contains(&Trigger::MarkPaid));
        assert!(triggers.contains(&Trigger::EnterPayment));
        assert!(!triggers.contains(&Trigger::Ship));
    }

    #[test]
    fn valid_triggers_from_paid() {
        let triggers = OrderStateMachine::valid_triggers(OrderState::Paid);
        assert_eq!(triggers, vec![Trigger::Cancel, Trigger::Ship]);
    }

    #[test]
    fn table_is_total() {
        // Every (state, trigger) pair resolves to either a defined
        // target or a rejection; the lookup never panics.
        for state in OrderState::ALL {
            for trigger in Trigger::ALL {
                let target = OrderStateMachine::target(state, trigger);
                if state.is_terminal() {
                    assert_eq!(target, None);
                }
                if let Some(next) = target {
                    assert_ne!(state, next);
                }
            }
        }
    }
}
