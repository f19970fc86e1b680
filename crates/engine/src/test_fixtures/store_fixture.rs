//! In-memory document store for stateful test assertions.
//!
//! Mock expectations work for single-call ports, but the bulk
//! batcher needs a store that remembers what was committed, in how
//! many commits, and what each document looks like afterwards. This
//! fixture records all of that and can inject commit failures.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ptu_domain::DocId;

use crate::infrastructure::ports::{
    Document, DocumentStore, Fields, StoreError, WriteBatch, MAX_OPS_PER_COMMIT,
};

#[derive(Default)]
struct StoreState {
    // collection -> doc_id -> fields
    documents: BTreeMap<String, BTreeMap<String, Fields>>,
    committed_op_sizes: Vec<usize>,
    fail_commits_from: Option<usize>,
}

/// Shared-state in-memory store implementing the full port contract,
/// including merge semantics and the per-commit operation ceiling.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every commit starting from the `n`th (zero-based).
    pub fn fail_commits_from(self, n: usize) -> Self {
        self.state.lock().expect("store lock").fail_commits_from = Some(n);
        self
    }

    pub fn commit_count(&self) -> usize {
        self.state.lock().expect("store lock").committed_op_sizes.len()
    }

    /// Operation counts of the successful commits, in commit order.
    pub fn committed_op_sizes(&self) -> Vec<usize> {
        self.state
            .lock()
            .expect("store lock")
            .committed_op_sizes
            .clone()
    }

    pub fn collection_len(&self, collection: &str) -> usize {
        self.state
            .lock()
            .expect("store lock")
            .documents
            .get(collection)
            .map_or(0, |c| c.len())
    }

    pub fn document(&self, collection: &str, id: &str) -> Option<Fields> {
        self.state
            .lock()
            .expect("store lock")
            .documents
            .get(collection)
            .and_then(|c| c.get(id))
            .cloned()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let state = self.state.lock().expect("store lock");
        Ok(state
            .documents
            .get(collection)
            .map(|c| {
                c.iter()
                    .map(|(id, fields)| Document {
                        id: DocId::from(id.as_str()),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    fn allocate_id(&self) -> DocId {
        DocId::generate()
    }

    fn batch(&self) -> Box<dyn WriteBatch> {
        Box::new(InMemoryBatch {
            state: self.state.clone(),
            ops: Vec::new(),
        })
    }
}

struct QueuedWrite {
    collection: String,
    doc_id: String,
    fields: Fields,
    merge: bool,
}

struct InMemoryBatch {
    state: Arc<Mutex<StoreState>>,
    ops: Vec<QueuedWrite>,
}

#[async_trait]
impl WriteBatch for InMemoryBatch {
    fn set(&mut self, collection: &str, id: &DocId, fields: Fields) {
        self.ops.push(QueuedWrite {
            collection: collection.to_string(),
            doc_id: id.to_string(),
            fields,
            merge: false,
        });
    }

    fn merge(&mut self, collection: &str, id: &DocId, fields: Fields) {
        self.ops.push(QueuedWrite {
            collection: collection.to_string(),
            doc_id: id.to_string(),
            fields,
            merge: true,
        });
    }

    fn ops(&self) -> usize {
        self.ops.len()
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let InMemoryBatch { state, ops } = *self;
        if ops.len() > MAX_OPS_PER_COMMIT {
            return Err(StoreError::WriteFailed(format!(
                "batch of {} operations exceeds the {}-operation commit limit",
                ops.len(),
                MAX_OPS_PER_COMMIT
            )));
        }

        let mut state = state.lock().expect("store lock");
        if let Some(from) = state.fail_commits_from {
            if state.committed_op_sizes.len() >= from {
                return Err(StoreError::WriteFailed("injected commit failure".to_string()));
            }
        }

        let op_count = ops.len();
        for op in ops {
            let collection = state.documents.entry(op.collection).or_default();
            if op.merge {
                let doc = collection.entry(op.doc_id).or_default();
                doc.extend(op.fields);
            } else {
                collection.insert(op.doc_id, op.fields);
            }
        }
        state.committed_op_sizes.push(op_count);
        Ok(())
    }
}
