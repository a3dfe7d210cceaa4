//! Model registry: the document-store seam, the thin CRUD repository over
//! it, and the result sanitizer applied before records leave the service.

pub mod model;
pub mod repository;
pub mod sanitize;
pub mod store;

pub use model::{Model, ModelDocument, ModelFilter, NewModel};
pub use sanitize::{sanitize, sanitize_all, ModelView};
pub use store::{DocumentStore, JsonFileStore, MemoryStore, StoreError};
