//! Catalog reads and the per-entity document mappings.
//!
//! Edges, features, and classes all flow through the same generic
//! bulk upsert; what differs is how each record maps to document
//! fields. Those mappings live here, next to the read side that
//! returns them annotated with their resolved ids.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use ptu_domain::{Class, DocId, Edge, Feature};

use crate::infrastructure::ports::{DocumentStore, Fields, StoreError};
use crate::use_cases::bulk::BulkRecord;

/// Full-collection reads.
pub struct Catalog {
    store: Arc<dyn DocumentStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Dump a collection as a list of documents, each with its
    /// resolved `id` injected (winning over any stored `id` field).
    pub async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let docs = self.store.list(collection).await?;
        Ok(docs
            .into_iter()
            .map(|doc| {
                let mut fields = doc.fields;
                fields.insert("id".to_string(), json!(doc.id.as_str()));
                Value::Object(fields)
            })
            .collect())
    }
}

fn merge_extra(fields: &mut Fields, extra: &Option<Map<String, Value>>) {
    // Extra fields layer over the fixed ones, last write wins.
    if let Some(extra) = extra {
        for (key, value) in extra {
            fields.insert(key.clone(), value.clone());
        }
    }
}

impl BulkRecord for Edge {
    fn doc_id(&self) -> Option<DocId> {
        self.id.clone()
    }

    fn to_document(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("effect".to_string(), json!(self.effect));
        let prerequisite = self.prerequisite.clone().unwrap_or_default();
        fields.insert("prerequisite".to_string(), json!(prerequisite));
        merge_extra(&mut fields, &self.extra);
        fields
    }
}

impl BulkRecord for Feature {
    fn doc_id(&self) -> Option<DocId> {
        self.id.clone()
    }

    /// Sparse mapping: absent optional fields are omitted from the
    /// document, never stored as null.
    fn to_document(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("effect".to_string(), json!(self.effect));
        fields.insert("tags".to_string(), json!(self.tags));
        if let Some(target) = &self.target {
            fields.insert("target".to_string(), json!(target));
        }
        if let Some(trigger) = &self.trigger {
            fields.insert("trigger".to_string(), json!(trigger));
        }
        if let Some(note) = &self.note {
            fields.insert("note".to_string(), json!(note));
        }
        let prerequisite = self.prerequisite.clone().unwrap_or_default();
        fields.insert("prerequisite".to_string(), json!(prerequisite));
        merge_extra(&mut fields, &self.extra);
        fields
    }
}

impl BulkRecord for Class {
    fn doc_id(&self) -> Option<DocId> {
        self.id.clone()
    }

    fn to_document(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("features".to_string(), json!(self.features));
        merge_extra(&mut fields, &self.extra);
        fields
    }
}
