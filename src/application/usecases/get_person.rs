// Use case: get_person.

use crate::application::context::AppContext;
use crate::application::shared::person_errors::PersonUseCaseError;
use crate::domain::entities::person::Person;
use crate::domain::value_objects::ids::PersonId;

/// Fetches a single person by id.
pub struct GetPersonUseCase;

impl GetPersonUseCase {
    /// Get a person by ID; a missing record yields `NotFound`.
    pub async fn execute(ctx: &AppContext, id: PersonId) -> Result<Person, PersonUseCaseError> {
        // Step 1: Fetch from storage.
        let person = ctx.repos.person.get(id).await?;

        // Step 2: Return NotFound when missing.
        person.ok_or(PersonUseCaseError::NotFound)
    }
}
