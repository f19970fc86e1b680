//! Generic batched upsert.
//!
//! One routine serves every catalog entity; the entity-specific part
//! is the [`BulkRecord`] mapping (caller id + document fields). The
//! store caps a commit at 500 operations, so the batcher commits
//! every 450 queued writes and keeps going - each input record is
//! queued exactly once, in input order, across however many commits
//! that takes.

use std::sync::Arc;

use serde::Serialize;

use ptu_domain::DocId;

use crate::infrastructure::ports::{DocumentStore, Fields, StoreError};

/// Commit the open batch once this many operations are queued.
/// Leaves headroom under the store's hard 500-op commit ceiling.
pub const BATCH_COMMIT_THRESHOLD: usize = 450;

/// Entity-to-document mapping for bulk upserts.
pub trait BulkRecord {
    /// Caller-supplied document id, if any. Records with an id are
    /// merge-upserted; records without one get a fresh generated id.
    fn doc_id(&self) -> Option<DocId>;

    /// The document fields to persist for this record.
    fn to_document(&self) -> Fields;
}

#[derive(Debug, thiserror::Error)]
pub enum BulkError {
    #[error("empty record list")]
    Empty,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a bulk upsert: counts plus resolved ids in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkSummary {
    pub created: usize,
    pub updated: usize,
    pub doc_ids: Vec<DocId>,
}

/// Batched upsert of a record list into one collection.
pub struct BulkUpsert {
    store: Arc<dyn DocumentStore>,
}

impl BulkUpsert {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Upsert `records` into `collection`, committing in chunks.
    ///
    /// Commits are strictly sequential; a failed commit propagates
    /// immediately, leaving earlier commits durable and later records
    /// unqueued.
    pub async fn execute<R: BulkRecord>(
        &self,
        collection: &str,
        records: &[R],
    ) -> Result<BulkSummary, BulkError> {
        if records.is_empty() {
            return Err(BulkError::Empty);
        }

        let mut summary = BulkSummary::default();
        let mut batch = self.store.batch();

        for record in records {
            let fields = record.to_document();
            match record.doc_id() {
                Some(id) => {
                    batch.merge(collection, &id, fields);
                    summary.updated += 1;
                    summary.doc_ids.push(id);
                }
                None => {
                    let id = self.store.allocate_id();
                    batch.set(collection, &id, fields);
                    summary.created += 1;
                    summary.doc_ids.push(id);
                }
            }

            if batch.ops() >= BATCH_COMMIT_THRESHOLD {
                batch.commit().await?;
                batch = self.store.batch();
            }
        }

        if batch.ops() > 0 {
            batch.commit().await?;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::InMemoryStore;
    use crate::use_cases::collections;
    use ptu_domain::Edge;
    use serde_json::json;
    use std::collections::HashSet;

    #[tokio::test]
    async fn empty_list_is_rejected_without_store_operations() {
        let store = Arc::new(InMemoryStore::new());
        let bulk = BulkUpsert::new(store.clone());

        let result = bulk.execute::<Edge>(collections::EDGES, &[]).await;

        assert!(matches!(result, Err(BulkError::Empty)));
        assert_eq!(store.commit_count(), 0);
        assert_eq!(store.collection_len(collections::EDGES), 0);
    }

    #[tokio::test]
    async fn thousand_generated_records_take_three_commits() {
        let store = Arc::new(InMemoryStore::new());
        let bulk = BulkUpsert::new(store.clone());

        let records: Vec<Edge> = (0..1000)
            .map(|i| Edge::new(format!("Edge {i}"), "Effect."))
            .collect();
        let summary = bulk
            .execute(collections::EDGES, &records)
            .await
            .expect("bulk upsert");

        assert_eq!(summary.created, 1000);
        assert_eq!(summary.updated, 0);
        assert_eq!(summary.doc_ids.len(), 1000);

        let distinct: HashSet<&DocId> = summary.doc_ids.iter().collect();
        assert_eq!(distinct.len(), 1000);

        assert_eq!(store.commit_count(), 3);
        assert_eq!(store.committed_op_sizes(), vec![450, 450, 100]);
        assert_eq!(store.collection_len(collections::EDGES), 1000);
    }

    #[tokio::test]
    async fn resolved_ids_come_back_in_input_order() {
        let store = Arc::new(InMemoryStore::new());
        let bulk = BulkUpsert::new(store.clone());

        let records = vec![
            Edge::new("First", "Effect."),
            Edge::new("Second", "Effect.").with_id("second"),
            Edge::new("Third", "Effect."),
        ];
        let summary = bulk
            .execute(collections::EDGES, &records)
            .await
            .expect("bulk upsert");

        assert_eq!(summary.created, 2);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.doc_ids[1], DocId::from("second"));
        assert_ne!(summary.doc_ids[0], summary.doc_ids[2]);
    }

    #[tokio::test]
    async fn fixed_id_resubmission_merges_second_payload_over_first() {
        let store = Arc::new(InMemoryStore::new());
        let bulk = BulkUpsert::new(store.clone());

        let mut extra = serde_json::Map::new();
        extra.insert("rank".to_string(), json!(1));
        let first = Edge {
            extra: Some(extra),
            ..Edge::new("Swimmer", "Swim fast.").with_id("swimmer")
        };

        let mut extra = serde_json::Map::new();
        extra.insert("cost".to_string(), json!(2));
        let second = Edge {
            extra: Some(extra),
            ..Edge::new("Swimmer", "Swim faster.").with_id("swimmer")
        };

        let summary = bulk
            .execute(collections::EDGES, std::slice::from_ref(&first))
            .await
            .expect("first upsert");
        assert_eq!(summary.updated, 1);

        let summary = bulk
            .execute(collections::EDGES, std::slice::from_ref(&second))
            .await
            .expect("second upsert");
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.created, 0);

        let doc = store
            .document(collections::EDGES, "swimmer")
            .expect("stored document");
        assert_eq!(doc.get("effect"), Some(&json!("Swim faster.")));
        // Top-level fields absent from the second payload survive.
        assert_eq!(doc.get("rank"), Some(&json!(1)));
        assert_eq!(doc.get("cost"), Some(&json!(2)));
        assert_eq!(store.collection_len(collections::EDGES), 1);
    }

    #[tokio::test]
    async fn commit_failure_leaves_earlier_batches_durable() {
        let store = Arc::new(InMemoryStore::new().fail_commits_from(1));
        let bulk = BulkUpsert::new(store.clone());

        let records: Vec<Edge> = (0..900)
            .map(|i| Edge::new(format!("Edge {i}"), "Effect."))
            .collect();
        let err = bulk
            .execute(collections::EDGES, &records)
            .await
            .expect_err("second commit fails");

        assert!(matches!(err, BulkError::Store(StoreError::WriteFailed(_))));
        assert_eq!(store.commit_count(), 1);
        assert_eq!(store.collection_len(collections::EDGES), 450);
    }
}
