//! User registration service.
//!
//! A hexagonal CRUD service for registered users: the [`domain`] holds the
//! entity, errors, ports and use cases; [`inbound`] exposes them over HTTP;
//! [`outbound`] stores them in PostgreSQL or in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
