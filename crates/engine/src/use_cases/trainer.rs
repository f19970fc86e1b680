//! Trainer sheet creation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ptu_domain::{BasicInfo, DocId, Trainer};

use crate::infrastructure::ports::{ClockPort, DocumentStore, StoreError};
use crate::use_cases::collections;

/// Request body for creating a trainer sheet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTrainer {
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    /// Explicit document id. The write is a full overwrite, so any
    /// existing document under this id is replaced wholesale.
    #[serde(default)]
    pub doc_id: Option<DocId>,
}

impl NewTrainer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A persisted trainer with its resolved document id.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedTrainer {
    pub id: DocId,
    #[serde(flatten)]
    pub trainer: Trainer,
}

/// Builds and persists a complete level-0 trainer sheet.
pub struct CreateTrainer {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn ClockPort>,
}

impl CreateTrainer {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// Assemble a level-0 sheet, stamp it, and persist it as a single
    /// full-set write. No retries; store failures propagate unchanged.
    pub async fn execute(&self, request: NewTrainer) -> Result<CreatedTrainer, StoreError> {
        let basic_info = BasicInfo {
            name: request.name,
            gender: request.gender,
            age: request.age,
            background: request.background,
            height: request.height,
            weight: request.weight,
        };
        let trainer = Trainer::new_level0(basic_info, self.clock.now());

        let id = request
            .doc_id
            .unwrap_or_else(|| self.store.allocate_id());

        let Value::Object(fields) = serde_json::json!(&trainer) else {
            return Err(StoreError::Serialization(
                "trainer did not serialize to an object".to_string(),
            ));
        };

        let mut batch = self.store.batch();
        batch.set(collections::TRAINERS, &id, fields);
        batch.commit().await?;

        Ok(CreatedTrainer { id, trainer })
    }
}
