//! Result sanitizer.
//!
//! The one place the opaque identifier becomes a string. Works over a single
//! record or a sequence; no other field is transformed. Internal code never
//! holds a stringified id — sanitization produces a separate view type
//! instead of rewriting the record in place.

use serde::Serialize;

use crate::model::Model;

/// JSON-safe projection of a [`Model`], as returned by every route.
#[derive(Debug, Clone, Serialize)]
pub struct ModelView {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub model_type: String,
    pub name: String,
    pub description: String,
    pub created_ts: i64,
    pub latest_version: i64,
}

pub fn sanitize(model: &Model) -> ModelView {
    ModelView {
        id: model.id.to_string(),
        model_type: model.document.model_type.clone(),
        name: model.document.name.clone(),
        description: model.document.description.clone(),
        created_ts: model.document.created_ts,
        latest_version: model.document.latest_version,
    }
}

pub fn sanitize_all(models: &[Model]) -> Vec<ModelView> {
    models.iter().map(sanitize).collect()
}
