//! Driven port for user persistence.
//!
//! The registration service depends only on this trait. Concrete stores live
//! under `crate::outbound`; tests substitute the generated
//! `MockUserRepository`.

use async_trait::async_trait;

use crate::domain::{User, UserDetails, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage contract for [`User`] records.
///
/// Adapters own identifier assignment: `save(None, ..)` must allocate a new
/// [`UserId`], while `save(Some(id), ..)` stores the details under `id`,
/// replacing any previous record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, in the adapter's natural order.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert or replace a user and return the stored record.
    async fn save(
        &self,
        id: Option<UserId>,
        details: &UserDetails,
    ) -> Result<User, UserPersistenceError>;

    /// Remove a user. Removing an unknown identifier is not an error.
    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError>;
}
