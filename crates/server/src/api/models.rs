//! Model CRUD handlers.
//!
//! Each handler parses its input, delegates to the repository, and returns
//! the sanitized record. Only `name` and `description` are mutable after
//! creation; the update payload's field whitelist is enforced by serde.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use modelops_core::ModelId;
use modelops_registry::{repository, sanitize, sanitize_all, ModelFilter, NewModel};

use crate::api::result;
use crate::error::ApiError;
use crate::state::SharedState;

fn parse_id(raw: &str) -> Result<ModelId, ApiError> {
    raw.parse()
        .map_err(|e: modelops_core::id::ParseIdError| ApiError::BadRequest(e.to_string()))
}

fn require(field: Option<String>, name: &str) -> Result<String, ApiError> {
    field.ok_or_else(|| ApiError::Validation(format!("Missing required parameter: {name}")))
}

// ── Create ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateModelRequest {
    #[serde(rename = "type")]
    pub model_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn create(
    State(state): State<SharedState>,
    body: Result<Json<CreateModelRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(body) = body?;
    let input = NewModel {
        model_type: require(body.model_type, "type")?,
        name: require(body.name, "name")?,
        description: body.description,
    };
    let model = repository::create(state.store.as_ref(), input)?;
    Ok(result(sanitize(&model)))
}

// ── List / Get ────────────────────────────────────────────────────

pub async fn list(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    let models = repository::list(state.store.as_ref(), &ModelFilter::default())?;
    Ok(result(sanitize_all(&models)))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&id)?;
    match repository::get(state.store.as_ref(), id)? {
        Some(model) => Ok(result(sanitize(&model))),
        // Absent is not an error here: the result is null-shaped.
        None => Ok(result(serde_json::Value::Null)),
    }
}

// ── Update ────────────────────────────────────────────────────────

/// Update payload. `deny_unknown_fields` is the whitelist: anything outside
/// `name`/`description` is rejected before the handler runs.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateModelRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateModelRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(body) = body?;
    let id = parse_id(&id)?;

    let mut model = repository::get(state.store.as_ref(), id)?
        .ok_or_else(|| ApiError::NotFound(format!("No model found for id {id}")))?;

    if let Some(name) = body.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("Blank field: name".to_string()));
        }
        model.document.name = name;
    }
    if let Some(description) = body.description {
        model.document.description = description;
    }

    if !repository::update(state.store.as_ref(), &model)? {
        return Err(ApiError::NotFound(format!("No model found for id {id}")));
    }
    Ok(result(sanitize(&model)))
}

// ── Delete ────────────────────────────────────────────────────────

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&id)?;
    if !repository::delete(state.store.as_ref(), id)? {
        return Err(ApiError::NotFound(format!("No model found for id {id}")));
    }
    Ok(result(json!({ "success": true })))
}
