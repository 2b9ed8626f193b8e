//! Domain entities, errors, ports and services.
//!
//! Purpose: keep the registration rules independent of HTTP and storage.
//! Inbound adapters talk to the driving ports in [`ports`]; outbound
//! adapters implement [`ports::UserRepository`].
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failures.
//! - [`User`], [`UserDetails`], [`UserId`], [`PinCode`]: the user entity.
//! - [`UserRegistrationService`]: the use cases.
//! - [`TraceId`]: per-request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_registration_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{PinCode, User, UserDetails, UserId};
pub use self::user_registration_service::{
    MISSING_USER_OR_ID_MESSAGE, UserRegistrationService, missing_user_or_id, unknown_user,
};
