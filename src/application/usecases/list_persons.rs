// Use case: list_persons.

use crate::application::context::AppContext;
use crate::application::shared::person_errors::PersonUseCaseError;
use crate::domain::entities::person::Person;

/// Lists every person in the phonebook.
pub struct ListPersonsUseCase;

impl ListPersonsUseCase {
    pub async fn execute(ctx: &AppContext) -> Result<Vec<Person>, PersonUseCaseError> {
        Ok(ctx.repos.person.list().await?)
    }
}
