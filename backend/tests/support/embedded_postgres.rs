//! Database lifecycle helpers on top of an embedded cluster.
//!
//! Creation and teardown go through `postgres` because `DROP DATABASE`
//! cannot run inside the transactions Diesel opens. Schema setup itself uses
//! the service's own embedded migrations.

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use user_registration::domain::ports::UserPersistenceError;
use user_registration::outbound::persistence::apply_migrations;

use super::format_postgres_error;

const MAINTENANCE_DB: &str = "postgres";

fn admin_client(cluster: &TestCluster) -> Result<Client, UserPersistenceError> {
    let url = cluster.connection().database_url(MAINTENANCE_DB);
    Client::connect(&url, NoTls)
        .map_err(|err| UserPersistenceError::connection(format_postgres_error(&err)))
}

/// Drops and recreates `name`, applies migrations and returns its URL.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<String, UserPersistenceError> {
    let mut client = admin_client(cluster)?;
    // Separate statements: a multi-statement string runs as one transaction.
    client
        .batch_execute(&format!(r#"DROP DATABASE IF EXISTS "{name}" WITH (FORCE)"#))
        .map_err(|err| UserPersistenceError::query(format_postgres_error(&err)))?;
    client
        .batch_execute(&format!(r#"CREATE DATABASE "{name}""#))
        .map_err(|err| UserPersistenceError::query(format_postgres_error(&err)))?;

    let url = cluster.connection().database_url(name);
    apply_migrations(&url)?;
    Ok(url)
}

/// Drops the `users` table to simulate schema loss.
pub fn drop_users_table(url: &str) -> Result<(), UserPersistenceError> {
    let mut client = Client::connect(url, NoTls)
        .map_err(|err| UserPersistenceError::connection(format_postgres_error(&err)))?;
    client
        .batch_execute("DROP TABLE IF EXISTS users")
        .map_err(|err| UserPersistenceError::query(format_postgres_error(&err)))?;
    Ok(())
}
