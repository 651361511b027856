use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::PersonRow;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonRepositoryError {
    StorageUnavailable,
}

impl From<DatabaseError> for PersonRepositoryError {
    fn from(_: DatabaseError) -> Self {
        PersonRepositoryError::StorageUnavailable
    }
}

#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Fetch every stored person.
    async fn list(&self) -> Result<Vec<PersonRow>, PersonRepositoryError>;
    /// Fetch a person by its ID. Returns `None` if it doesn't exist.
    async fn get(&self, person_id: uuid::Uuid) -> Result<Option<PersonRow>, PersonRepositoryError>;
    /// Create a person and return exactly what was stored in the database.
    async fn insert(&self, row: &PersonRow) -> Result<PersonRow, PersonRepositoryError>;
    /// Replace name and number of an existing person. Returns `None` if it doesn't exist.
    async fn update(&self, row: &PersonRow) -> Result<Option<PersonRow>, PersonRepositoryError>;
    /// Delete a person by its ID. Deleting a missing person is not an error.
    async fn delete(&self, person_id: uuid::Uuid) -> Result<(), PersonRepositoryError>;
    /// Number of stored persons.
    async fn count(&self) -> Result<i64, PersonRepositoryError>;
}
