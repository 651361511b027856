use crate::domain::services::person_validator::PersonValidator;
use crate::infrastructure::db::repositories::Repositories;

/// Shared application resources used by use cases.
pub struct AppContext {
    pub repos: Repositories,
    pub validator: PersonValidator,
}

impl AppContext {
    /// Build a new application context with shared repositories and the validator.
    pub fn new(repos: Repositories, validator: PersonValidator) -> Self {
        Self { repos, validator }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::AppContext;
    use crate::domain::services::person_validator::PersonValidator;
    use crate::infrastructure::db::dto::PersonRow;
    use crate::infrastructure::db::repositories::Repositories;
    use crate::infrastructure::db::repositories::person_repository::PersonRepository;
    use crate::infrastructure::db::stores::person_store::{PersonRepositoryError, PersonStore};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// In-memory store keeping rows in insertion order.
    #[derive(Default)]
    pub struct MemoryPersonStore {
        rows: Mutex<Vec<PersonRow>>,
    }

    impl MemoryPersonStore {
        pub fn with_rows(rows: Vec<PersonRow>) -> Self {
            Self {
                rows: Mutex::new(rows),
            }
        }

        pub fn rows(&self) -> Vec<PersonRow> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PersonStore for MemoryPersonStore {
        async fn list(&self) -> Result<Vec<PersonRow>, PersonRepositoryError> {
            Ok(self.rows())
        }

        async fn get(
            &self,
            person_id: uuid::Uuid,
        ) -> Result<Option<PersonRow>, PersonRepositoryError> {
            Ok(self.rows().into_iter().find(|r| r.id == person_id))
        }

        async fn insert(&self, row: &PersonRow) -> Result<PersonRow, PersonRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|r| r.id == row.id) {
                return Err(PersonRepositoryError::StorageUnavailable);
            }
            rows.push(row.clone());
            Ok(row.clone())
        }

        async fn update(
            &self,
            row: &PersonRow,
        ) -> Result<Option<PersonRow>, PersonRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let Some(stored) = rows.iter_mut().find(|r| r.id == row.id) else {
                return Ok(None);
            };
            stored.name = row.name.clone();
            stored.number = row.number.clone();
            Ok(Some(stored.clone()))
        }

        async fn delete(&self, person_id: uuid::Uuid) -> Result<(), PersonRepositoryError> {
            self.rows.lock().unwrap().retain(|r| r.id != person_id);
            Ok(())
        }

        async fn count(&self) -> Result<i64, PersonRepositoryError> {
            Ok(self.rows.lock().unwrap().len() as i64)
        }
    }

    /// Store whose every call fails as if the database were unreachable.
    #[derive(Clone)]
    pub struct NullPersonStore;

    #[async_trait]
    impl PersonStore for NullPersonStore {
        async fn list(&self) -> Result<Vec<PersonRow>, PersonRepositoryError> {
            Err(PersonRepositoryError::StorageUnavailable)
        }

        async fn get(
            &self,
            _person_id: uuid::Uuid,
        ) -> Result<Option<PersonRow>, PersonRepositoryError> {
            Err(PersonRepositoryError::StorageUnavailable)
        }

        async fn insert(&self, _row: &PersonRow) -> Result<PersonRow, PersonRepositoryError> {
            Err(PersonRepositoryError::StorageUnavailable)
        }

        async fn update(
            &self,
            _row: &PersonRow,
        ) -> Result<Option<PersonRow>, PersonRepositoryError> {
            Err(PersonRepositoryError::StorageUnavailable)
        }

        async fn delete(&self, _person_id: uuid::Uuid) -> Result<(), PersonRepositoryError> {
            Err(PersonRepositoryError::StorageUnavailable)
        }

        async fn count(&self) -> Result<i64, PersonRepositoryError> {
            Err(PersonRepositoryError::StorageUnavailable)
        }
    }

    /// Context backed by the given store and a lenient validator.
    pub fn test_context_with(store: Arc<dyn PersonStore>) -> AppContext {
        let repos = Repositories {
            db: None,
            person: Arc::new(PersonRepository::new(store)),
        };
        AppContext::new(repos, PersonValidator::default())
    }

    /// Context backed by an empty in-memory store.
    pub fn test_context() -> AppContext {
        test_context_with(Arc::new(MemoryPersonStore::default()))
    }

    /// Context whose store always reports storage failures.
    pub fn failing_context() -> AppContext {
        test_context_with(Arc::new(NullPersonStore))
    }
}
