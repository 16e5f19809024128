use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool is returned to the caller rather than stored anywhere global; it
/// is handed to `DbRepository::new` and closed again with [`close`].
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    if settings.url.trim().is_empty() {
        return Err(DbError::ConnectionConfigError(
            "DATABASE_URL must be set.".to_string(),
        ));
    }

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout())
        .connect(&settings.url)
        .await
        .map_err(DbError::ConnectionError)?;

    tracing::info!(
        max_connections = settings.max_connections,
        "Database connection pool established"
    );
    Ok(pool)
}

/// Applies the migrations embedded from `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Waits for checked-out connections to be returned, then closes the pool.
pub async fn close(pool: PgPool) {
    pool.close().await;
    tracing::info!("Database connection pool closed");
}
