//! HTTP error response mapping.
//!
//! Two body shapes exist: lookups answer `{"error": "..."}` while the
//! creation endpoint answers `{"errors": ["..."]}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pizzeria_domain::error::{PizzeriaError, ValidationError};

/// JSON error body returned by lookup endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON error body returned by the creation endpoint.
#[derive(Serialize)]
struct ErrorsBody {
    errors: Vec<String>,
}

fn status_and_message(err: &PizzeriaError) -> (StatusCode, String) {
    match err {
        PizzeriaError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        PizzeriaError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        PizzeriaError::Storage(err) => {
            tracing::error!(error = %err, "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Maps [`PizzeriaError`] to a `{"error": ...}` response.
pub struct ApiError(PizzeriaError);

impl<E: Into<PizzeriaError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = status_and_message(&self.0);
        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Maps [`PizzeriaError`] to a `{"errors": [...]}` response.
pub struct ApiErrors(PizzeriaError);

impl<E: Into<PizzeriaError>> From<E> for ApiErrors {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiErrors {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (
            status,
            Json(ErrorsBody {
                errors: vec![message],
            }),
        )
            .into_response()
    }
}

impl ApiErrors {
    pub(crate) fn malformed_body() -> Self {
        Self(ValidationError::MalformedBody.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use pizzeria_domain::error::NotFoundError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_render_single_error_for_not_found() {
        let response = ApiError::from(NotFoundError {
            entity: "Restaurant",
            id: "3".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Restaurant not found"})
        );
    }

    #[tokio::test]
    async fn should_render_error_list_for_validation() {
        let response = ApiErrors::from(ValidationError::Rejected).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"errors": ["validation errors"]})
        );
    }

    #[tokio::test]
    async fn should_hide_storage_details() {
        let source = std::io::Error::other("disk on fire");
        let response = ApiError::from(PizzeriaError::Storage(Box::new(source))).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "internal server error"})
        );
    }
}
