//! SQLite-backed document store.
//!
//! One row per document: `(collection, doc_id)` keys a JSON object of
//! fields. Batch commits run inside a single transaction so a failed
//! commit leaves no partial batch behind.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Row, SqlitePool};

use ptu_domain::DocId;

use crate::infrastructure::ports::{
    Document, DocumentStore, Fields, StoreError, WriteBatch, MAX_OPS_PER_COMMIT,
};

/// SQLite implementation of the document store port.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub async fn new(db_path: &str) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                doc_id TEXT NOT NULL,
                fields TEXT NOT NULL,
                PRIMARY KEY (collection, doc_id)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query(
            "SELECT doc_id, fields FROM documents WHERE collection = ? ORDER BY doc_id",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                let id: String = row.get("doc_id");
                let json: String = row.get("fields");
                let fields = parse_fields(&json)?;
                Ok(Document {
                    id: DocId::from(id),
                    fields,
                })
            })
            .collect()
    }

    fn allocate_id(&self) -> DocId {
        DocId::generate()
    }

    fn batch(&self) -> Box<dyn WriteBatch> {
        Box::new(SqliteWriteBatch {
            pool: self.pool.clone(),
            ops: Vec::new(),
        })
    }
}

fn parse_fields(json: &str) -> Result<Fields, StoreError> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(StoreError::Serialization(
            "stored document is not a JSON object".to_string(),
        )),
        Err(e) => Err(StoreError::Serialization(e.to_string())),
    }
}

struct QueuedWrite {
    collection: String,
    doc_id: String,
    fields: Fields,
    merge: bool,
}

struct SqliteWriteBatch {
    pool: SqlitePool,
    ops: Vec<QueuedWrite>,
}

#[async_trait]
impl WriteBatch for SqliteWriteBatch {
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
        if self.ops.len() > MAX_OPS_PER_COMMIT {
            return Err(StoreError::WriteFailed(format!(
                "batch of {} operations exceeds the {}-operation commit limit",
                self.ops.len(),
                MAX_OPS_PER_COMMIT
            )));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        for op in self.ops {
            let fields = if op.merge {
                let existing = sqlx::query(
                    "SELECT fields FROM documents WHERE collection = ? AND doc_id = ?",
                )
                .bind(&op.collection)
                .bind(&op.doc_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

                match existing {
                    Some(row) => {
                        let json: String = row.get("fields");
                        let mut merged = parse_fields(&json)?;
                        // Supplied top-level fields win; others stay.
                        merged.extend(op.fields);
                        merged
                    }
                    None => op.fields,
                }
            } else {
                op.fields
            };

            let json = serde_json::to_string(&Value::Object(fields))
                .map_err(|e| StoreError::Serialization(e.to_string()))?;

            sqlx::query(
                r#"
                INSERT INTO documents (collection, doc_id, fields)
                VALUES (?, ?, ?)
                ON CONFLICT(collection, doc_id) DO UPDATE SET
                    fields = excluded.fields
                "#,
            )
            .bind(&op.collection)
            .bind(&op.doc_id)
            .bind(json)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}
