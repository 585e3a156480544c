//! Database connection pool and migration management.

use sqlx::{Pool, Postgres};

/// PostgreSQL connection pool shared by the persistence layer.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// The pool is an explicit resource: it is built once at startup, handed to
/// the account store, and closed with [`close_pool`] after the server stops.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Upper bound on open connections
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the server
/// cannot be reached.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run the embedded migrations from the `migrations/` directory.
///
/// Applied migrations are tracked in `_sqlx_migrations`, so each runs once.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Close every connection in the pool and wait for checked-out connections
/// to be returned.
pub async fn close_pool(pool: DbPool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}
