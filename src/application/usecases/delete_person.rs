// Use case: delete_person.

use crate::application::context::AppContext;
use crate::application::shared::person_errors::PersonUseCaseError;
use crate::domain::value_objects::ids::PersonId;

/// Deletes a person; deleting an unknown id succeeds.
pub struct DeletePersonUseCase;

impl DeletePersonUseCase {
    pub async fn execute(ctx: &AppContext, id: PersonId) -> Result<(), PersonUseCaseError> {
        Ok(ctx.repos.person.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::DeletePersonUseCase;
    use crate::application::context::test_support::{
        MemoryPersonStore, failing_context, test_context, test_context_with,
    };
    use crate::application::shared::person_errors::PersonUseCaseError;
    use crate::domain::entities::person::Person;
    use crate::domain::value_objects::ids::PersonId;
    use crate::infrastructure::db::dto::PersonRow;
    use std::sync::Arc;

    #[tokio::test]
    async fn given_existing_person_when_execute_should_remove_it() {
        let person = Person::new("Ada", "123");
        let store = Arc::new(MemoryPersonStore::with_rows(vec![PersonRow::from_person(
            &person,
        )]));
        let ctx = test_context_with(store.clone());

        DeletePersonUseCase::execute(&ctx, person.id).await.unwrap();

        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn given_unknown_id_when_execute_should_succeed() {
        let result = DeletePersonUseCase::execute(&test_context(), PersonId::new()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn given_storage_error_when_execute_should_return_storage_error() {
        let result = DeletePersonUseCase::execute(&failing_context(), PersonId::new()).await;

        assert!(matches!(result, Err(PersonUseCaseError::Storage(_))));
    }
}
