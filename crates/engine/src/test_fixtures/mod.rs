//! Test fixtures.

mod store_fixture;

pub use store_fixture::InMemoryStore;
