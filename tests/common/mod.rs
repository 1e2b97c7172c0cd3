#![allow(dead_code)]

use argon2::Params;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use session_auth_seaorm::hash::PasswordHasher;
use session_auth_seaorm::migration::{Migrator, MigratorTrait};
use session_auth_seaorm::CredentialStore;
use tracing_subscriber::EnvFilter;

/// Fresh in-memory SQLite database with the schema applied.
pub async fn setup() -> DatabaseConnection {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    // A single connection, otherwise each pooled connection sees its own
    // empty in-memory database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("failed to open in-memory sqlite");
    Migrator::up(&conn, None)
        .await
        .expect("failed to run migrations");
    conn
}

/// Argon2 at minimum cost so the suite stays fast.
pub fn fast_hasher() -> PasswordHasher {
    PasswordHasher::with_params(Params::new(Params::MIN_M_COST, 1, 1, None).unwrap())
}

pub fn credential_store(conn: &DatabaseConnection) -> CredentialStore {
    CredentialStore::new(conn.clone()).with_hasher(fast_hasher())
}
