//! Thin CRUD functions mapping repository verbs onto the document store.
//!
//! Store failures propagate untranslated; absence is `None`/`false`, never
//! an error at this layer.

use chrono::Utc;

use modelops_core::ModelId;

use crate::model::{Model, ModelDocument, ModelFilter, NewModel};
use crate::store::{DocumentStore, StoreError};

/// Insert a new record with `created_ts` and `latest_version` defaults and
/// return it freshly read back from the store.
pub fn create(store: &dyn DocumentStore, input: NewModel) -> Result<Model, StoreError> {
    let doc = ModelDocument {
        model_type: input.model_type,
        name: input.name,
        description: input.description.unwrap_or_default(),
        created_ts: Utc::now().timestamp_millis(),
        latest_version: 0,
    };
    let id = store.insert(&doc)?;
    store.find_by_id(id)?.ok_or(StoreError::ReadBack(id))
}

pub fn get(store: &dyn DocumentStore, id: ModelId) -> Result<Option<Model>, StoreError> {
    store.find_by_id(id)
}

pub fn list(store: &dyn DocumentStore, filter: &ModelFilter) -> Result<Vec<Model>, StoreError> {
    store.find(filter)
}

/// Persist the full record as given (last-write-wins, no concurrency check).
/// Returns `false` when the record no longer exists.
pub fn update(store: &dyn DocumentStore, model: &Model) -> Result<bool, StoreError> {
    store.replace(model)
}

/// Remove by id. Returns `false` when nothing was removed.
pub fn delete(store: &dyn DocumentStore, id: ModelId) -> Result<bool, StoreError> {
    store.remove(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn new_model(name: &str) -> NewModel {
        NewModel {
            model_type: "performance_prediction".to_string(),
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn create_assigns_defaults_and_reads_back() {
        let store = MemoryStore::new();
        let model = create(&store, new_model("Model 1")).unwrap();

        assert_eq!(model.document.model_type, "performance_prediction");
        assert_eq!(model.document.name, "Model 1");
        assert_eq!(model.document.description, "");
        assert_eq!(model.document.latest_version, 0);
        assert!(model.document.created_ts > 0);

        let fetched = get(&store, model.id).unwrap().unwrap();
        assert_eq!(fetched, model);
    }

    #[test]
    fn create_keeps_caller_description() {
        let store = MemoryStore::new();
        let model = create(
            &store,
            NewModel {
                model_type: "classifier".to_string(),
                name: "Described".to_string(),
                description: Some("has one".to_string()),
            },
        )
        .unwrap();
        assert_eq!(model.document.description, "has one");
    }

    #[test]
    fn get_absent_is_none_not_error() {
        let store = MemoryStore::new();
        assert!(get(&store, ModelId::new()).unwrap().is_none());
    }

    #[test]
    fn list_includes_created_record() {
        let store = MemoryStore::new();
        let model = create(&store, new_model("Listed")).unwrap();

        let all = list(&store, &ModelFilter::default()).unwrap();
        assert!(all.iter().any(|m| m.id == model.id));
    }

    #[test]
    fn update_is_last_write_wins() {
        let store = MemoryStore::new();
        let mut model = create(&store, new_model("Before")).unwrap();

        model.document.name = "Funky".to_string();
        assert!(update(&store, &model).unwrap());
        assert_eq!(
            get(&store, model.id).unwrap().unwrap().document.name,
            "Funky"
        );
    }

    #[test]
    fn delete_then_get_is_none() {
        let store = MemoryStore::new();
        let model = create(&store, new_model("Doomed")).unwrap();

        assert!(delete(&store, model.id).unwrap());
        assert!(get(&store, model.id).unwrap().is_none());
        assert!(!delete(&store, model.id).unwrap());
    }
}
