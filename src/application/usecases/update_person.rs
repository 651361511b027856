// Use case: update_person.

use crate::application::context::AppContext;
use crate::application::shared::person_errors::PersonUseCaseError;
use crate::domain::entities::person::Person;
use crate::domain::value_objects::ids::PersonId;

#[derive(Debug, Clone)]
pub struct UpdatePersonCommand {
    pub id: PersonId,
    pub name: Option<String>,
    pub number: Option<String>,
}

/// Replaces the name and number of an existing person.
pub struct UpdatePersonUseCase;

impl UpdatePersonUseCase {
    pub async fn execute(
        ctx: &AppContext,
        cmd: UpdatePersonCommand,
    ) -> Result<Person, PersonUseCaseError> {
        // Step 1: Validate the replacement fields.
        let fields = ctx
            .validator
            .validate(cmd.name.as_deref(), cmd.number.as_deref())?;

        // Step 2: Load the current record so id and metadata are preserved.
        let current = ctx
            .repos
            .person
            .get(cmd.id)
            .await?
            .ok_or(PersonUseCaseError::NotFound)?;

        // Step 3: Persist the replacement; the record may vanish in between.
        let updated = current.with_contact(fields.name, fields.number);
        ctx.repos
            .person
            .update(&updated)
            .await?
            .ok_or(PersonUseCaseError::NotFound)
    }
}
