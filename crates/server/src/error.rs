//! The JSON error envelope.
//!
//! Every failure a handler can hit collapses into
//! `{"error": {"message": ..., "type": ...}}`. The HTTP status stays 200;
//! clients switch on the envelope, not the status line.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use modelops_registry::StoreError;

#[derive(Debug)]
pub enum ApiError {
    /// Missing, unknown, or blank fields in a request payload.
    Validation(String),
    /// The addressed record does not exist.
    NotFound(String),
    /// Unparseable request: bad JSON body or malformed path id.
    BadRequest(String),
    /// Upstream store failure, propagated untranslated.
    Store(StoreError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::NotFound(_) => "not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Store(_) => "store_error",
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Validation(m) | ApiError::NotFound(m) | ApiError::BadRequest(m) => m.clone(),
            ApiError::Store(e) => e.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Store(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.message();
        tracing::warn!(kind = self.kind(), %message, "request failed");
        let body = json!({"error": {"message": message, "type": self.kind()}});
        (StatusCode::OK, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn envelope_carries_message_and_type() {
        let response = ApiError::Validation("Blank field: name".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Blank field: name");
        assert_eq!(body["error"]["type"], "validation_error");
    }

    #[tokio::test]
    async fn store_errors_keep_their_message() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let response = ApiError::from(StoreError::Io(io)).into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "store_error");
        assert!(body["error"]["message"].as_str().unwrap().contains("disk gone"));
    }
}
