use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::application::shared::person_errors::PersonUseCaseError;
use crate::domain::services::person_validator::PersonValidationError;
use crate::domain::value_objects::ids::MalformedId;

pub const MALFORMATTED_ID: &str = "malformatted id";
pub const MALFORMED_BODY: &str = "malformed request body";
pub const INTERNAL_ERROR: &str = "internal server error";

/// JSON body of every 4xx/5xx response that carries one.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Terminal failure handler: every handler returns `Result<_, ApiError>` and
/// propagates with `?`; the status mapping and logging happen here only.
#[derive(Debug)]
pub enum ApiError {
    MalformedId(MalformedId),
    MalformedBody(String),
    Validation(PersonValidationError),
    NotFound,
    Storage(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedId(_) | ApiError::MalformedBody(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MalformedId> for ApiError {
    fn from(err: MalformedId) -> Self {
        ApiError::MalformedId(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl From<PersonUseCaseError> for ApiError {
    fn from(err: PersonUseCaseError) -> Self {
        match err {
            PersonUseCaseError::Validation(e) => ApiError::Validation(e),
            PersonUseCaseError::NotFound => ApiError::NotFound,
            PersonUseCaseError::Storage(msg) => ApiError::Storage(msg),
        }
    }
}

fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::MalformedId(err) => {
                warn!(id = %err.raw, "malformatted id");
                json_error(status, MALFORMATTED_ID)
            }
            ApiError::MalformedBody(detail) => {
                warn!(%detail, "malformed request body");
                json_error(status, MALFORMED_BODY)
            }
            ApiError::Validation(err) => {
                warn!(error = %err, "validation failed");
                json_error(status, err.to_string())
            }
            ApiError::NotFound => status.into_response(),
            ApiError::Storage(detail) => {
                error!(%detail, "storage failure");
                json_error(status, INTERNAL_ERROR)
            }
        }
    }
}
