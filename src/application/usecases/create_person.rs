// Use case: create_person.

use crate::application::context::AppContext;
use crate::application::shared::person_errors::PersonUseCaseError;
use crate::domain::entities::person::Person;

/// Raw fields as received from a client.
#[derive(Debug, Clone, Default)]
pub struct CreatePersonCommand {
    pub name: Option<String>,
    pub number: Option<String>,
}

/// Validates and stores a new person.
pub struct CreatePersonUseCase;

impl CreatePersonUseCase {
    /// Create a new person and return it with its assigned id.
    pub async fn execute(
        ctx: &AppContext,
        cmd: CreatePersonCommand,
    ) -> Result<Person, PersonUseCaseError> {
        // Step 1: Validate required fields (name before number).
        let fields = ctx
            .validator
            .validate(cmd.name.as_deref(), cmd.number.as_deref())?;

        // Step 2: Build the domain person (assigns id and timestamp).
        let person = Person::new(fields.name, fields.number);

        // Step 3: Persist and return what was stored.
        Ok(ctx.repos.person.insert(&person).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::{CreatePersonCommand, CreatePersonUseCase};
    use crate::application::context::test_support::{
        MemoryPersonStore, failing_context, test_context_with,
    };
    use crate::application::shared::person_errors::PersonUseCaseError;
    use crate::domain::services::person_validator::PersonValidationError;
    use std::sync::Arc;

    fn command(name: Option<&str>, number: Option<&str>) -> CreatePersonCommand {
        CreatePersonCommand {
            name: name.map(str::to_string),
            number: number.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn given_valid_command_when_execute_should_store_person() {
        let store = Arc::new(MemoryPersonStore::default());
        let ctx = test_context_with(store.clone());

        let person = CreatePersonUseCase::execute(&ctx, command(Some("Ada"), Some("123")))
            .await
            .unwrap();

        assert_eq!(person.name, "Ada");
        assert_eq!(person.number, "123");
        let rows = store.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, person.id.0);
    }

    #[tokio::test]
    async fn given_missing_name_when_execute_should_not_touch_store() {
        let store = Arc::new(MemoryPersonStore::default());
        let ctx = test_context_with(store.clone());

        let result = CreatePersonUseCase::execute(&ctx, command(None, Some("123"))).await;

        assert_eq!(
            result,
            Err(PersonUseCaseError::Validation(PersonValidationError::NameMissing))
        );
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn given_missing_number_when_execute_should_return_validation_error() {
        let store = Arc::new(MemoryPersonStore::default());
        let ctx = test_context_with(store);

        let result = CreatePersonUseCase::execute(&ctx, command(Some("Ada"), Some(""))).await;

        assert_eq!(
            result,
            Err(PersonUseCaseError::Validation(PersonValidationError::NumberMissing))
        );
    }

    #[tokio::test]
    async fn given_storage_error_when_execute_should_return_storage_error() {
        let result =
            CreatePersonUseCase::execute(&failing_context(), command(Some("Ada"), Some("1"))).await;

        assert!(matches!(result, Err(PersonUseCaseError::Storage(_))));
    }
}
