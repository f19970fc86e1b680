//! Use cases - request orchestration over the document store.

pub mod bulk;
pub mod catalog;
pub mod trainer;

pub use bulk::{BulkError, BulkRecord, BulkSummary, BulkUpsert};
pub use catalog::Catalog;
pub use trainer::{CreateTrainer, CreatedTrainer, NewTrainer};

/// Store collection names. Flat, exactly these four.
pub mod collections {
    pub const EDGES: &str = "edges";
    pub const FEATURES: &str = "features";
    pub const CLASSES: &str = "classes";
    pub const TRAINERS: &str = "trainers";
}
