//! Shared helpers for integration suites that need a real PostgreSQL.
//!
//! Each file under `tests/` compiles as its own crate, so suites pull these
//! in with `mod support;`.

pub mod cluster_skip;
pub mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{drop_users_table, reset_database};

/// Render a `postgres` error with the server message and SQLSTATE.
///
/// `Display` on `postgres::Error` often collapses to `db error`, which hides
/// what actually went wrong in CI logs.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}
