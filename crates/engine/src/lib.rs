//! PTU Sheet Backend engine library.
//!
//! This crate contains all server-side code for the sheet backend.
//!
//! ## Structure
//!
//! - `use_cases/` - Bulk upserts, catalog reads, trainer creation
//! - `infrastructure/` - Document store port + adapters
//! - `api/` - HTTP and stdio tool entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for stateful store assertions.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
