//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every `/user` endpoint, the health checks and the
//! error schema wrappers. Swagger UI serves it in debug builds; the
//! `openapi-dump` binary prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{UserPayload, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registration API",
        description = "Create, read, update and delete registered users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserPayload, UserResponse, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "User registration operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
