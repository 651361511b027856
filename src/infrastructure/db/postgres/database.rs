use crate::infrastructure::db::database::{Database, DatabaseError};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

const PERSONS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS persons (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    number TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
)";

pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    /// Open a pool against the given connection string.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, DatabaseError> {
        let options: PgConnectOptions = url
            .parse()
            .map_err(|e: sqlx::Error| DatabaseError::Connection(e.to_string()))?;
        Self::connect_with(options, max_connections).await
    }

    /// Open a pool from pre-built connect options (e.g. with an overridden password).
    pub async fn connect_with(
        options: PgConnectOptions,
        max_connections: u32,
    ) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Create the `persons` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        self.execute(PERSONS_SCHEMA).await.map(|_| ())
    }

    /// Close every pooled connection; later queries fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn with_conn<T, E, F>(&self, f: F) -> Result<T, E>
    where
        for<'c> F: FnOnce(
            &'c mut sqlx::PgConnection,
        ) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>,
        E: From<DatabaseError>,
    {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        f(&mut conn).await
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    async fn execute(&self, query: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query(query)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
