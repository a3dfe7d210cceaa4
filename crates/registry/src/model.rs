//! Model record types: the persisted entity, its id-less document form, and
//! the exact-match listing filter.

use serde::{Deserialize, Serialize};

use modelops_core::ModelId;

/// Fields of a model document, minus the store-assigned identifier.
///
/// This is what the store is asked to insert; the id comes back from the
/// insert call, never from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    #[serde(rename = "type")]
    pub model_type: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unix-milliseconds creation timestamp. Set once, never mutated.
    pub created_ts: i64,
    /// Version counter, initialized to zero. No operation increments it yet.
    pub latest_version: i64,
}

/// A persisted model record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: ModelId,
    #[serde(flatten)]
    pub document: ModelDocument,
}

impl Model {
    pub fn from_parts(id: ModelId, document: ModelDocument) -> Self {
        Self { id, document }
    }
}

/// Caller input for creating a model. `description` defaults to empty;
/// `created_ts` and `latest_version` are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewModel {
    pub model_type: String,
    pub name: String,
    pub description: Option<String>,
}

/// Exact-match filter for listing. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct ModelFilter {
    pub model_type: Option<String>,
    pub name: Option<String>,
}

impl ModelFilter {
    pub fn matches(&self, doc: &ModelDocument) -> bool {
        if let Some(t) = &self.model_type {
            if doc.model_type != *t {
                return false;
            }
        }
        if let Some(n) = &self.name {
            if doc.name != *n {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(model_type: &str, name: &str) -> ModelDocument {
        ModelDocument {
            model_type: model_type.to_string(),
            name: name.to_string(),
            description: String::new(),
            created_ts: 0,
            latest_version: 0,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ModelFilter::default();
        assert!(filter.matches(&doc("performance_prediction", "Model 1")));
    }

    #[test]
    fn filter_is_exact_match() {
        let filter = ModelFilter {
            model_type: Some("performance_prediction".to_string()),
            name: None,
        };
        assert!(filter.matches(&doc("performance_prediction", "Model 1")));
        assert!(!filter.matches(&doc("performance", "Model 1")));
    }

    #[test]
    fn model_serializes_with_flattened_document() {
        let model = Model::from_parts(ModelId::new(), doc("a", "b"));
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["type"], "a");
        assert_eq!(value["name"], "b");
        assert!(value.get("document").is_none());
    }
}
