//! Builds the HTTP state from the configured user store.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use user_registration::domain::UserRegistrationService;
use user_registration::inbound::http::state::HttpState;
use user_registration::outbound::memory::InMemoryUserRepository;
use user_registration::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Wire the registration service to PostgreSQL when a pool is configured,
/// otherwise to the in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL user repository");
            let repository = Arc::new(DieselUserRepository::new(pool.clone()));
            HttpState::from_service(Arc::new(UserRegistrationService::new(repository)))
        }
        None => {
            info!("no database configured; using in-memory user repository");
            let repository = Arc::new(InMemoryUserRepository::new());
            HttpState::from_service(Arc::new(UserRegistrationService::new(repository)))
        }
    };
    web::Data::new(state)
}
