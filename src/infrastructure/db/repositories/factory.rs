use std::sync::Arc;

use crate::infrastructure::db::database::{Database, DatabaseError};
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::postgres::person_store_postgres::PersonStorePostgres;
use crate::infrastructure::db::repositories::person_repository::PersonRepository;

#[derive(Clone)]
pub struct Repositories {
    pub db: Option<Arc<PostgresDatabase>>,
    pub person: Arc<PersonRepository>,
}

impl Repositories {
    /// Build all repositories backed by Postgres stores.
    pub fn postgres(db: Arc<PostgresDatabase>) -> Self {
        let person_store = Arc::new(PersonStorePostgres::new(db.clone()));

        Self {
            db: Some(db),
            person: Arc::new(PersonRepository::new(person_store)),
        }
    }

    /// Execute a raw SQL statement against the backing database.
    pub async fn execute(&self, query: &str) -> Result<u64, DatabaseError> {
        let Some(db) = self.db.as_ref() else {
            return Err(DatabaseError::Connection("db_unavailable".to_string()));
        };
        db.execute(query).await
    }
}
