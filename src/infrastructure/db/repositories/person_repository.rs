use crate::domain::entities::person::Person;
use crate::domain::value_objects::ids::PersonId;
use crate::infrastructure::db::dto::PersonRow;
use crate::infrastructure::db::stores::person_store::{PersonRepositoryError, PersonStore};
use std::sync::Arc;

pub struct PersonRepository {
    store: Arc<dyn PersonStore>,
}

impl PersonRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Fetch every person.
    pub async fn list(&self) -> Result<Vec<Person>, PersonRepositoryError> {
        let rows = self.store.list().await?;
        Ok(rows.into_iter().map(PersonRow::into_person).collect())
    }

    /// Fetch a person by its ID. Returns `None` if it doesn't exist.
    pub async fn get(&self, person_id: PersonId) -> Result<Option<Person>, PersonRepositoryError> {
        let row = self.store.get(person_id.0).await?;
        Ok(row.map(PersonRow::into_person))
    }

    /// Create a person and return what was actually stored in the database.
    pub async fn insert(&self, person: &Person) -> Result<Person, PersonRepositoryError> {
        let stored = self.store.insert(&PersonRow::from_person(person)).await?;
        Ok(stored.into_person())
    }

    /// Replace a person's contact fields. Returns `None` if it doesn't exist.
    pub async fn update(&self, person: &Person) -> Result<Option<Person>, PersonRepositoryError> {
        let stored = self.store.update(&PersonRow::from_person(person)).await?;
        Ok(stored.map(PersonRow::into_person))
    }

    /// Delete a person by its ID; missing persons are ignored.
    pub async fn delete(&self, person_id: PersonId) -> Result<(), PersonRepositoryError> {
        self.store.delete(person_id.0).await
    }

    pub async fn count(&self) -> Result<i64, PersonRepositoryError> {
        self.store.count().await
    }
}
