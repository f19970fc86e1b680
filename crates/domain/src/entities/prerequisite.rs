use serde::{Deserialize, Serialize};

/// Requirement gate attached to an edge or feature.
///
/// Recursive: `any_of` holds disjunctive sub-requirements, any one of
/// which satisfies the gate. A prerequisite with every field
/// empty/absent means "no requirement".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prerequisite {
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub edges: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub stats: Vec<String>,
    #[serde(rename = "anyOf", default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Prerequisite>>,
}

impl Prerequisite {
    pub fn is_empty(&self) -> bool {
        self.level.is_none()
            && self.edges.is_empty()
            && self.features.is_empty()
            && self.moves.is_empty()
            && self.stats.is_empty()
            && self.any_of.as_ref().is_none_or(|a| a.is_empty())
    }
}
