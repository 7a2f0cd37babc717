use async_trait::async_trait;
use shiftboard_core::error::CoreError;
use shiftboard_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::nurse::{CreateNurse, Nurse};
use crate::store::NurseStore;

struct Inner {
    next_id: DbId,
    nurses: Vec<Nurse>,
}

/// Process-local [`NurseStore`].
///
/// The id counter and the record vector sit behind one `RwLock`, so an
/// insert assigns its id and appends atomically with respect to other
/// inserts and readers. Designed to be wrapped in `Arc` and shared.
pub struct InMemoryNurseStore {
    inner: RwLock<Inner>,
}

impl InMemoryNurseStore {
    /// Create an empty store. The first insert receives id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                nurses: Vec::new(),
            }),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.nurses.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.nurses.is_empty()
    }
}

impl Default for InMemoryNurseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NurseStore for InMemoryNurseStore {
    async fn insert(&self, input: &CreateNurse) -> Result<Nurse, CoreError> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id += 1;

        let nurse = Nurse::from_create(id, input);
        inner.nurses.push(nurse.clone());

        tracing::debug!(nurse_id = id, total = inner.nurses.len(), "Nurse inserted");
        Ok(nurse)
    }

    async fn list_all(&self) -> Result<Vec<Nurse>, CoreError> {
        Ok(self.inner.read().await.nurses.clone())
    }
}
