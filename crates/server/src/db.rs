use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::store::PgStore;

/// Shared application state passed to Axum handlers via `State`.
///
/// Generic over the store so the router can run against PostgreSQL in
/// production and an in-memory store in tests.
#[derive(Clone)]
pub struct AppState<S = PgStore> {
    pub store: S,
}

impl<S> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Pool created lazily; no connections open until the first query, so
/// the pool is not tied to whichever tokio runtime created it.
static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static MIGRATED: AtomicBool = AtomicBool::new(false);

/// Create a new database connection pool from environment variables.
pub fn create_pool() -> Pool<Postgres> {
    // Load .env file if present (ignored in production where env vars are set directly).
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(&database_url)
        .expect("Failed to create database pool")
}

/// Run database migrations against the given pool.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Get or initialize the process-wide pool used by Dioxus server functions.
/// Migrations run at most once per process.
pub async fn get_db() -> &'static Pool<Postgres> {
    let pool = POOL.get_or_init(create_pool);

    if !MIGRATED.swap(true, Ordering::SeqCst) {
        if let Err(e) = run_migrations(pool).await {
            tracing::error!(error = %e, "Database migrations failed");
        }
    }

    pool
}

/// Store over the shared pool, for server functions.
pub async fn get_store() -> PgStore {
    PgStore::new(get_db().await.clone())
}
