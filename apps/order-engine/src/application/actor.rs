//! Request actor context.
//!
//! The authenticated caller is passed explicitly to every use case
//! instead of being read from ambient request state, so authorization
//! rules stay unit-testable without a transport layer.

use crate::domain::shared::UserId;

/// The authenticated caller of a use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The caller's user id.
    pub user: UserId,
    /// Staff may manage the catalog and act on other users' orders.
    pub is_staff: bool,
    /// Admins may additionally manage payment types.
    pub is_admin: bool,
}

impl Actor {
    /// A regular storefront user.
    #[must_use]
    pub fn user(user: UserId) -> Self {
        Self {
            user,
            is_staff: false,
            is_admin: false,
        }
    }

    /// A staff member.
    #[must_use]
    pub fn staff(user: UserId) -> Self {
        Self {
            user,
            is_staff: true,
            is_admin: false,
        }
    }

    /// An administrator (implies staff).
    #[must_use]
    pub fn admin(user: UserId) -> Self {
        Self {
            user,
            is_staff: true,
            is_admin: true,
        }
    }

    /// True if the actor may read or mutate rows owned by `owner`.
    #[must_use]
    pub fn can_act_for(&self, owner: &UserId) -> bool {
        self.is_staff || &self.user == owner
    }
}
