//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side: listing and lookup by id.
    pub users_query: Arc<dyn UsersQuery>,
    /// Write side: create, update and delete.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_registration::domain::UserRegistrationService;
    /// use user_registration::inbound::http::state::HttpState;
    /// use user_registration::outbound::memory::InMemoryUserRepository;
    ///
    /// let service = UserRegistrationService::new(Arc::new(InMemoryUserRepository::new()));
    /// let state = HttpState::from_service(Arc::new(service));
    /// let _query = state.users_query.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersQuery + UsersCommand + 'static,
    {
        Self {
            users_query: service.clone(),
            users_command: service,
        }
    }
}
