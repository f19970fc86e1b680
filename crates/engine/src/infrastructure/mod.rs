//! Infrastructure - document store port and adapters.

pub mod clock;
pub mod ports;
pub mod sqlite;
