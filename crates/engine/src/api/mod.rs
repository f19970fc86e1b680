//! API entry points: HTTP routes and the stdio tool server.

pub mod http;
pub mod tools;
