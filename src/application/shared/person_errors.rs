use crate::domain::services::person_validator::PersonValidationError;
use crate::infrastructure::db::stores::person_store::PersonRepositoryError;
use thiserror::Error;

/// Failure kinds surfaced by the person use cases.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersonUseCaseError {
    #[error(transparent)]
    Validation(#[from] PersonValidationError),
    #[error("person not found")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<PersonRepositoryError> for PersonUseCaseError {
    fn from(err: PersonRepositoryError) -> Self {
        PersonUseCaseError::Storage(format!("{err:?}"))
    }
}
