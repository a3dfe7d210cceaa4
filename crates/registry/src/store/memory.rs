//! In-memory [`DocumentStore`] used by tests (and nothing else).

use std::collections::HashMap;
use std::sync::Mutex;

use modelops_core::ModelId;

use crate::model::{Model, ModelDocument, ModelFilter};
use crate::store::{DocumentStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    by_id: HashMap<ModelId, Model>,
    // Insertion order, so `find` stays deterministic.
    order: Vec<ModelId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, doc: &ModelDocument) -> Result<ModelId, StoreError> {
        let mut inner = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let id = ModelId::new();
        inner.by_id.insert(id, Model::from_parts(id, doc.clone()));
        inner.order.push(id);
        Ok(id)
    }

    fn find_by_id(&self, id: ModelId) -> Result<Option<Model>, StoreError> {
        let inner = self.records.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner.by_id.get(&id).cloned())
    }

    fn find(&self, filter: &ModelFilter) -> Result<Vec<Model>, StoreError> {
        let inner = self.records.lock().unwrap_or_else(|e| e.into_inner());
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id))
            .filter(|m| filter.matches(&m.document))
            .cloned()
            .collect())
    }

    fn replace(&self, model: &Model) -> Result<bool, StoreError> {
        let mut inner = self.records.lock().unwrap_or_else(|e| e.into_inner());
        if !inner.by_id.contains_key(&model.id) {
            return Ok(false);
        }
        inner.by_id.insert(model.id, model.clone());
        Ok(true)
    }

    fn remove(&self, id: ModelId) -> Result<bool, StoreError> {
        let mut inner = self.records.lock().unwrap_or_else(|e| e.into_inner());
        if inner.by_id.remove(&id).is_none() {
            return Ok(false);
        }
        inner.order.retain(|existing| *existing != id);
        Ok(true)
    }
}
