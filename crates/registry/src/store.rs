//! Document-store seam.
//!
//! The store engine itself is an external collaborator; this module only
//! defines the boundary the rest of the system talks through, plus the two
//! shipped implementations: a JSON-file-backed store and an in-memory store
//! for tests.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use modelops_core::ModelId;

use crate::model::{Model, ModelDocument, ModelFilter};

/// Errors surfaced by store operations. Never translated by callers; they
/// propagate to the HTTP error envelope or kill the invoking script.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Inserted document {0} could not be read back")]
    ReadBack(ModelId),
}

/// CRUD over model documents identified by an opaque [`ModelId`].
pub trait DocumentStore: Send + Sync {
    /// Insert a new document, assigning and returning its identifier.
    fn insert(&self, doc: &ModelDocument) -> Result<ModelId, StoreError>;

    /// Fetch by id; absent ids are `None`, not an error.
    fn find_by_id(&self, id: ModelId) -> Result<Option<Model>, StoreError>;

    /// All records matching an exact-match filter, in store order.
    fn find(&self, filter: &ModelFilter) -> Result<Vec<Model>, StoreError>;

    /// Replace the record with the given id wholesale (last-write-wins).
    /// Returns `false` when no record has that id.
    fn replace(&self, model: &Model) -> Result<bool, StoreError>;

    /// Remove by id. Returns `false` when no record had that id.
    fn remove(&self, id: ModelId) -> Result<bool, StoreError>;
}
