use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::PersonRow;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::stores::person_store::{PersonRepositoryError, PersonStore};
use async_trait::async_trait;
use sqlx::PgConnection;
use std::sync::Arc;
use tracing::warn;

fn storage_error(e: sqlx::Error) -> PersonRepositoryError {
    warn!(error = %e, "person query failed");
    PersonRepositoryError::from(DatabaseError::Query(e.to_string()))
}

#[derive(Clone)]
pub struct PersonStorePostgres {
    db: Arc<PostgresDatabase>,
}

impl PersonStorePostgres {
    /// Build a Postgres-backed person store.
    pub fn new(db: Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    async fn list_impl_conn(
        conn: &mut PgConnection,
    ) -> Result<Vec<PersonRow>, PersonRepositoryError> {
        sqlx::query_as::<_, PersonRow>(
            "SELECT
                id,
                name,
                number,
                created_at
            FROM persons
            ORDER BY created_at, id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(storage_error)
    }

    async fn get_impl_conn(
        conn: &mut PgConnection,
        person_id: uuid::Uuid,
    ) -> Result<Option<PersonRow>, PersonRepositoryError> {
        sqlx::query_as::<_, PersonRow>(
            "SELECT
                id,
                name,
                number,
                created_at
            FROM persons
            WHERE id = $1",
        )
        .bind(person_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(storage_error)
    }

    async fn insert_impl_conn(
        conn: &mut PgConnection,
        row: &PersonRow,
    ) -> Result<PersonRow, PersonRepositoryError> {
        sqlx::query_as::<_, PersonRow>(
            "INSERT INTO persons (
                id,
                name,
                number,
                created_at
            )
            VALUES ($1,$2,$3,$4)
            RETURNING
                id,
                name,
                number,
                created_at",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.number)
        .bind(row.created_at)
        .fetch_one(&mut *conn)
        .await
        .map_err(storage_error)
    }

    async fn update_impl_conn(
        conn: &mut PgConnection,
        row: &PersonRow,
    ) -> Result<Option<PersonRow>, PersonRepositoryError> {
        sqlx::query_as::<_, PersonRow>(
            "UPDATE persons SET
                name = $2,
                number = $3
            WHERE id = $1
            RETURNING
                id,
                name,
                number,
                created_at",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.number)
        .fetch_optional(&mut *conn)
        .await
        .map_err(storage_error)
    }

    async fn delete_impl_conn(
        conn: &mut PgConnection,
        person_id: uuid::Uuid,
    ) -> Result<(), PersonRepositoryError> {
        sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(person_id)
            .execute(&mut *conn)
            .await
            .map_err(storage_error)?;

        Ok(())
    }

    async fn count_impl_conn(conn: &mut PgConnection) -> Result<i64, PersonRepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM persons")
            .fetch_one(&mut *conn)
            .await
            .map_err(storage_error)
    }
}

#[async_trait]
impl PersonStore for PersonStorePostgres {
    async fn list(&self) -> Result<Vec<PersonRow>, PersonRepositoryError> {
        self.db
            .with_conn(|conn| Box::pin(Self::list_impl_conn(conn)))
            .await
    }

    async fn get(&self, person_id: uuid::Uuid) -> Result<Option<PersonRow>, PersonRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::get_impl_conn(conn, person_id)))
            .await
    }

    async fn insert(&self, row: &PersonRow) -> Result<PersonRow, PersonRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| Box::pin(async move { Self::insert_impl_conn(conn, &row).await }))
            .await
    }

    async fn update(&self, row: &PersonRow) -> Result<Option<PersonRow>, PersonRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| Box::pin(async move { Self::update_impl_conn(conn, &row).await }))
            .await
    }

    async fn delete(&self, person_id: uuid::Uuid) -> Result<(), PersonRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::delete_impl_conn(conn, person_id)))
            .await
    }

    async fn count(&self) -> Result<i64, PersonRepositoryError> {
        self.db
            .with_conn(|conn| Box::pin(Self::count_impl_conn(conn)))
            .await
    }
}
