//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, DocumentStore};
use crate::use_cases::{BulkUpsert, Catalog, CreateTrainer};

/// Main application state.
///
/// Holds the store connection handle and the use cases built over it.
/// Constructed once in `main` and passed to handlers via Axum state;
/// read-only after initialization.
pub struct App {
    pub store: Arc<dyn DocumentStore>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: Catalog,
    pub bulk: BulkUpsert,
    pub create_trainer: CreateTrainer,
}

impl App {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn ClockPort>) -> Self {
        let use_cases = UseCases {
            catalog: Catalog::new(store.clone()),
            bulk: BulkUpsert::new(store.clone()),
            create_trainer: CreateTrainer::new(store.clone(), clock),
        };
        Self { store, use_cases }
    }
}
