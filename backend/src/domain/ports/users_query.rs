//! Driving port for reading users.
//!
//! HTTP handlers call this port; they never touch the repository directly.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Use-case port for user lookups.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every registered user, in repository order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// The user with `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::InvalidRequest`] when no such
    /// user exists.
    async fn find_user(&self, id: UserId) -> Result<User, Error>;
}
