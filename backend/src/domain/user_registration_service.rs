//! User registration use cases.
//!
//! [`UserRegistrationService`] implements the driving ports on top of a
//! [`UserRepository`]. It owns the only business rules of the service: an
//! update needs an identifier, and updates or deletes need an existing
//! record.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    UpdateUserRequest, UserPersistenceError, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{Error, User, UserDetails, UserId};

/// Message returned when an update arrives without a user or identifier.
pub const MISSING_USER_OR_ID_MESSAGE: &str = "User or ID must not be null!";

/// Client-facing message when the repository cannot be reached.
pub const REPOSITORY_UNAVAILABLE_MESSAGE: &str = "user repository unavailable";

/// Rejection for updates that carry no user or no identifier.
///
/// # Examples
/// ```
/// use user_registration::domain::{missing_user_or_id, ErrorCode};
///
/// let err = missing_user_or_id();
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.message(), "User or ID must not be null!");
/// ```
pub fn missing_user_or_id() -> Error {
    Error::invalid_request(MISSING_USER_OR_ID_MESSAGE)
}

/// Rejection for operations targeting an unknown identifier.
///
/// # Examples
/// ```
/// use user_registration::domain::{unknown_user, UserId};
///
/// let err = unknown_user(UserId::new(5));
/// assert_eq!(err.message(), "User with ID 5 does not exist.");
/// ```
pub fn unknown_user(id: UserId) -> Error {
    Error::invalid_request(format!("User with ID {id} does not exist."))
}

/// Registration service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserRegistrationService<R> {
    repository: Arc<R>,
}

impl<R> UserRegistrationService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserRegistrationService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                debug!(error = %message, "user repository connection failed");
                Error::service_unavailable(REPOSITORY_UNAVAILABLE_MESSAGE)
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
        }
    }

    async fn require_existing(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| {
                debug!(user_id = %id, "rejecting request for unknown user");
                unknown_user(id)
            })
    }
}

#[async_trait]
impl<R> UsersQuery for UserRegistrationService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        self.require_existing(id).await
    }
}

#[async_trait]
impl<R> UsersCommand for UserRegistrationService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, details: UserDetails) -> Result<User, Error> {
        let user = self
            .repository
            .save(None, &details)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, Error> {
        let UpdateUserRequest { id, details } = request;
        let Some(id) = id else {
            debug!("rejecting update without user id");
            return Err(missing_user_or_id());
        };
        self.require_existing(id).await?;

        let user = self
            .repository
            .save(Some(id), &details)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %id, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        self.require_existing(id).await?;
        self.repository
            .delete_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_registration_service_tests.rs"]
mod tests;
