//! [`JsonFileStore`] — whole-file JSON collection store.
//!
//! One JSON file per collection under a data directory, loaded and saved in
//! full on every operation. Stands in for the external document-store engine
//! behind the [`DocumentStore`] trait.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::info;

use modelops_core::ModelId;

use crate::model::{Model, ModelDocument, ModelFilter};
use crate::store::{DocumentStore, StoreError};

pub struct JsonFileStore {
    path: PathBuf,
    // Serializes load/save pairs; each operation rewrites the whole file.
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open (or create on first write) the collection file
    /// `{data_dir}/{database}.json`.
    pub fn new(data_dir: &PathBuf, database: &str) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(format!("{}.json", database));
        info!("Document store at {}", path.display());
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    fn load(&self) -> Result<Vec<Model>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, records: &[Model]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn insert(&self, doc: &ModelDocument) -> Result<ModelId, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut records = self.load()?;
        let id = ModelId::new();
        records.push(Model::from_parts(id, doc.clone()));
        self.save(&records)?;
        Ok(id)
    }

    fn find_by_id(&self, id: ModelId) -> Result<Option<Model>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.load()?.into_iter().find(|m| m.id == id))
    }

    fn find(&self, filter: &ModelFilter) -> Result<Vec<Model>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self
            .load()?
            .into_iter()
            .filter(|m| filter.matches(&m.document))
            .collect())
    }

    fn replace(&self, model: &Model) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut records = self.load()?;
        let idx = match records.iter().position(|m| m.id == model.id) {
            Some(i) => i,
            None => return Ok(false),
        };
        records[idx] = model.clone();
        self.save(&records)?;
        Ok(true)
    }

    fn remove(&self, id: ModelId) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|m| m.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> ModelDocument {
        ModelDocument {
            model_type: "performance_prediction".to_string(),
            name: name.to_string(),
            description: String::new(),
            created_ts: 1_700_000_000_000,
            latest_version: 0,
        }
    }

    #[test]
    fn insert_and_find_by_id() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(&tmp.path().to_path_buf(), "models_test").unwrap();

        let id = store.insert(&doc("Model 1")).unwrap();
        let found = store.find_by_id(id).unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.document.name, "Model 1");
    }

    #[test]
    fn survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().to_path_buf();

        let id = {
            let store = JsonFileStore::new(&data_dir, "models_test").unwrap();
            store.insert(&doc("Persistent")).unwrap()
        };

        let store = JsonFileStore::new(&data_dir, "models_test").unwrap();
        let found = store.find_by_id(id).unwrap().unwrap();
        assert_eq!(found.document.name, "Persistent");
    }

    #[test]
    fn find_applies_exact_match_filter() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(&tmp.path().to_path_buf(), "models_test").unwrap();

        store.insert(&doc("A")).unwrap();
        store.insert(&doc("B")).unwrap();

        let filter = ModelFilter {
            name: Some("A".to_string()),
            ..Default::default()
        };
        let matched = store.find(&filter).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].document.name, "A");

        let all = store.find(&ModelFilter::default()).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn replace_rewrites_record() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(&tmp.path().to_path_buf(), "models_test").unwrap();

        let id = store.insert(&doc("Before")).unwrap();
        let mut model = store.find_by_id(id).unwrap().unwrap();
        model.document.name = "After".to_string();

        assert!(store.replace(&model).unwrap());
        assert_eq!(
            store.find_by_id(id).unwrap().unwrap().document.name,
            "After"
        );
    }

    #[test]
    fn replace_absent_is_false() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(&tmp.path().to_path_buf(), "models_test").unwrap();

        let ghost = Model::from_parts(ModelId::new(), doc("Ghost"));
        assert!(!store.replace(&ghost).unwrap());
    }

    #[test]
    fn remove_twice_is_false_second_time() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(&tmp.path().to_path_buf(), "models_test").unwrap();

        let id = store.insert(&doc("Doomed")).unwrap();
        assert!(store.remove(id).unwrap());
        assert!(!store.remove(id).unwrap());
        assert!(store.find_by_id(id).unwrap().is_none());
    }
}
