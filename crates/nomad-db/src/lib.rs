//! # Nomad DB
//!
//! PostgreSQL connection pool for the Barefoot Nomad API.
//!
//! # Example
//!
//! ```ignore
//! use nomad_db::init_db_pool;
//!
//! let pool = init_db_pool().await?;
//! sqlx::migrate!("./migrations").run(&pool).await?;
//! ```

use std::env;

use sqlx::postgres::PgPoolOptions;

pub use sqlx::PgPool;

/// Initializes a PostgreSQL connection pool.
///
/// Reads `DATABASE_URL` (required) and `DATABASE_MAX_CONNECTIONS`
/// (default 10). The returned pool is cheaply cloneable and is shared
/// through the application state.
///
/// # Errors
///
/// Returns [`sqlx::Error::Configuration`] when `DATABASE_URL` is unset, or the
/// connection error when the database cannot be reached.
pub async fn init_db_pool() -> Result<PgPool, sqlx::Error> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    tracing::info!(max_connections, "Connecting to database");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
}
