//! Domain primitives shared by the record store and the HTTP layer.

pub mod error;
pub mod types;
