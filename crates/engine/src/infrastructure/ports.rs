//! Port traits for infrastructure boundaries.
//!
//! The document store is the only external system this service talks
//! to. It is modeled after a Firestore-style document database:
//! named flat collections, string document ids, batched writes with
//! full-set and merge-upsert semantics, and a hard per-commit
//! operation ceiling. Adapters could swap SQLite for a hosted store
//! without touching the use cases.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use ptu_domain::DocId;

/// Document fields as stored: a flat JSON object.
pub type Fields = Map<String, Value>;

/// Hard provider-imposed ceiling on operations per batch commit.
/// Callers batch at a lower threshold to keep headroom under it.
pub const MAX_OPS_PER_COMMIT: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Store write failed: {0}")]
    WriteFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A document read back from a collection.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocId,
    pub fields: Fields,
}

/// Firestore-style document database port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stream every document in a collection, ordered by id.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Allocate a fresh document id without a store round-trip.
    fn allocate_id(&self) -> DocId;

    /// Open an empty write batch.
    fn batch(&self) -> Box<dyn WriteBatch>;
}

/// An open batch of pending writes.
///
/// Nothing is durable until `commit`; a batch holding more than
/// [`MAX_OPS_PER_COMMIT`] operations is rejected at commit time.
#[async_trait]
pub trait WriteBatch: Send {
    /// Queue a full overwrite of the document.
    fn set(&mut self, collection: &str, id: &DocId, fields: Fields);

    /// Queue a merge-upsert: supplied top-level fields are written
    /// over the existing document (created if absent), other fields
    /// untouched.
    fn merge(&mut self, collection: &str, id: &DocId, fields: Fields);

    /// Number of operations queued so far.
    fn ops(&self) -> usize;

    /// Apply all queued operations atomically.
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
}

/// Clock abstraction so record timestamps are testable.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
