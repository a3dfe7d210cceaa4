//! HTTP handlers, grouped per resource.
//!
//! Success bodies are always `{"result": ...}`; failures go through
//! [`crate::error::ApiError`].

pub mod health;
pub mod models;

use axum::Json;
use serde::Serialize;
use serde_json::json;

/// Wrap a handler's payload in the success envelope.
pub fn result<T: Serialize>(value: T) -> Json<serde_json::Value> {
    Json(json!({ "result": value }))
}
