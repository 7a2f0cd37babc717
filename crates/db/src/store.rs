use async_trait::async_trait;
use shiftboard_core::error::CoreError;

use crate::models::nurse::{CreateNurse, Nurse};

/// Storage contract for nurse records.
///
/// Implementations own the record collection and the id assignment rule:
/// ids start at 1, increase monotonically and are never reused.
#[async_trait]
pub trait NurseStore: Send + Sync {
    /// Store a new record, returning it with its assigned id.
    async fn insert(&self, input: &CreateNurse) -> Result<Nurse, CoreError>;

    /// All records in insertion order. Empty when nothing has been stored.
    async fn list_all(&self) -> Result<Vec<Nurse>, CoreError>;

    /// Verify the store can serve requests.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
