// HTTP routes: person CRUD under /api/persons.

use crate::application::shared::person_errors::PersonUseCaseError;
use crate::application::usecases::create_person::{CreatePersonCommand, CreatePersonUseCase};
use crate::application::usecases::delete_person::DeletePersonUseCase;
use crate::application::usecases::get_person::GetPersonUseCase;
use crate::application::usecases::list_persons::ListPersonsUseCase;
use crate::application::usecases::update_person::{UpdatePersonCommand, UpdatePersonUseCase};
use crate::domain::value_objects::ids::PersonId;
use crate::interface::http::dto::person::{PersonRequest, PersonResponse};
use crate::interface::http::error::ApiError;
use crate::interface::http::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

/// Builds the person routes.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/api/persons", get(list_persons).post(create_person))
        .route(
            "/api/persons/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
}

async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    let persons = ListPersonsUseCase::execute(&state.ctx).await?;
    Ok(Json(persons.into_iter().map(PersonResponse::from).collect()))
}

/// Returns one person; an unknown id is answered here with an empty 404.
async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    // Step 1: Reject ids the store could never hold.
    let id = PersonId::parse(&id)?;

    // Step 2: Fetch and map.
    match GetPersonUseCase::execute(&state.ctx, id).await {
        Ok(person) => Ok(Json(PersonResponse::from(person)).into_response()),
        Err(PersonUseCaseError::NotFound) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(err) => Err(err.into()),
    }
}

async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Json<PersonResponse>, ApiError> {
    let Json(payload) = payload?;

    let person = CreatePersonUseCase::execute(
        &state.ctx,
        CreatePersonCommand {
            name: payload.name,
            number: payload.number,
        },
    )
    .await?;

    Ok(Json(PersonResponse::from(person)))
}

async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    // Step 1: Parse the id and body; both failures go to the translator.
    let id = PersonId::parse(&id)?;
    let Json(payload) = payload?;

    // Step 2: Replace the contact fields.
    let result = UpdatePersonUseCase::execute(
        &state.ctx,
        UpdatePersonCommand {
            id,
            name: payload.name,
            number: payload.number,
        },
    )
    .await;

    // Step 3: Map output to HTTP response.
    match result {
        Ok(person) => Ok(Json(PersonResponse::from(person)).into_response()),
        Err(PersonUseCaseError::NotFound) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(err) => Err(err.into()),
    }
}

/// Deletes a person. Always 204 for a well-formed id, whether or not it existed.
async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = PersonId::parse(&id)?;
    DeletePersonUseCase::execute(&state.ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
