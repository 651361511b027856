use crate::application::usecases::phonebook_info::PhonebookInfoUseCase;
use crate::interface::http::error::ApiError;
use crate::interface::http::state::AppState;
use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;

/// Builds the `/info` summary route.
pub fn router() -> Router<AppState> {
    Router::new().route("/info", get(info))
}

async fn info(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let info = PhonebookInfoUseCase::execute(&state.ctx).await?;
    Ok(Html(info.to_html()))
}

#[cfg(test)]
mod tests {
    use super::router;
    use crate::application::context::test_support::{
        MemoryPersonStore, failing_context, test_context_with,
    };
    use crate::domain::entities::person::Person;
    use crate::infrastructure::db::dto::PersonRow;
    use crate::interface::http::state::AppState;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn get_info() -> Request<Body> {
        Request::builder().uri("/info").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn given_two_persons_when_info_requested_should_report_count_as_html() {
        let rows = vec![
            PersonRow::from_person(&Person::new("Ada", "1")),
            PersonRow::from_person(&Person::new("Grace", "2")),
        ];
        let state = AppState {
            ctx: Arc::new(test_context_with(Arc::new(MemoryPersonStore::with_rows(rows)))),
            metrics: None,
        };

        let response = router().with_state(state).oneshot(get_info()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        assert!(
            content_type
                .and_then(|v| v.to_str().ok().map(|s| s.starts_with("text/html")))
                .unwrap_or(false)
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.starts_with("<p>Phonebook has info for 2 people</p>"));
        assert!(body.contains("GMT"));
    }

    #[tokio::test]
    async fn given_store_unavailable_when_info_requested_should_return_500() {
        let state = AppState {
            ctx: Arc::new(failing_context()),
            metrics: None,
        };

        let response = router().with_state(state).oneshot(get_info()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
