//! Nurse record persistence.
//!
//! [`NurseStore`] is the contract the HTTP layer depends on;
//! [`InMemoryNurseStore`] is the process-local implementation.

pub mod memory;
pub mod models;
pub mod store;

pub use memory::InMemoryNurseStore;
pub use store::NurseStore;
