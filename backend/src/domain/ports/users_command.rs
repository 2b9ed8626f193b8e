//! Driving port for mutating users.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDetails, UserId};

/// Request to overwrite an existing user.
///
/// `id` is optional because clients may omit it; the service rejects such
/// requests rather than the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// Target user.
    pub id: Option<UserId>,
    /// Replacement field values.
    pub details: UserDetails,
}

/// Use-case port for creating, updating and deleting users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a new user; the repository assigns its identifier.
    async fn create_user(&self, details: UserDetails) -> Result<User, Error>;

    /// Replace the details of an existing user.
    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, Error>;

    /// Remove an existing user.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
