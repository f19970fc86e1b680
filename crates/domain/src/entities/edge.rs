use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::Prerequisite;
use crate::ids::DocId;

/// An edge: a flat character-build perk with a single effect text.
///
/// `id` is caller-supplied for upserts; records without one get a
/// store-allocated id. `extra` is an open map of additional fields
/// merged over the fixed ones at storage time, last write wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocId>,
    pub name: String,
    pub effect: String,
    #[serde(default)]
    pub prerequisite: Option<Prerequisite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Map<String, Value>>,
}

impl Edge {
    pub fn new(name: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effect: effect.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<DocId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_prerequisite(mut self, prerequisite: Prerequisite) -> Self {
        self.prerequisite = Some(prerequisite);
        self
    }
}
