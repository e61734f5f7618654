//! PostgreSQL connection pool for the media tables.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use mediahub_core::config::DatabaseConfig;
use mediahub_core::error::{AppError, ErrorKind};

/// Application name reported to PostgreSQL in `pg_stat_activity`.
const APPLICATION_NAME: &str = "mediahub";

/// Tables the media lookup and download counter read and write.
const MEDIA_TABLES: [&str; 3] = ["media", "media_files", "media_file_versions"];

/// Shared pool used by the media and file version repositories.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connect using the configured URL and pool limits.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Invalid database URL", e)
            })?
            .application_name(APPLICATION_NAME);

        info!(
            target_db = %describe(&options),
            max_connections = config.max_connections,
            "Connecting to media database"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to media database: {e}"),
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    /// The underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Fail unless every media table exists.
    pub async fn verify_schema(&self) -> Result<(), AppError> {
        let missing: Vec<String> =
            sqlx::query_scalar("SELECT t FROM unnest($1::text[]) AS t WHERE to_regclass(t) IS NULL")
                .bind(&MEDIA_TABLES[..])
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Schema check failed", e)
                })?;

        if !missing.is_empty() {
            return Err(AppError::database(format!(
                "Media tables missing: {}",
                missing.join(", ")
            )));
        }

        info!(tables = ?MEDIA_TABLES, "Media schema ready");
        Ok(())
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Media database pool closed");
    }
}

/// `user@host:port/database` without the password.
fn describe(options: &PgConnectOptions) -> String {
    format!(
        "{}@{}:{}/{}",
        options.get_username(),
        options.get_host(),
        options.get_port(),
        options.get_database().unwrap_or_default()
    )
}
