//! In-memory match registry.
//!
//! The registry maps match ids to independently lockable records. The outer
//! read-write lock only guards the map itself; each match carries its own
//! mutex, which is the per-match serialization point for mutating calls.
//! There is no cross-match shared state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::error::{Result, RuntimeError};
use crate::types::{MatchId, MatchRecord};

#[derive(Default)]
pub(crate) struct MatchStore {
    inner: RwLock<HashMap<MatchId, Arc<Mutex<MatchRecord>>>>,
}

impl MatchStore {
    pub(crate) async fn insert(&self, record: MatchRecord) -> Arc<Mutex<MatchRecord>> {
        let id = record.id;
        let entry = Arc::new(Mutex::new(record));
        self.inner.write().await.insert(id, Arc::clone(&entry));
        entry
    }

    pub(crate) async fn get(&self, id: MatchId) -> Result<Arc<Mutex<MatchRecord>>> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RuntimeError::MatchNotFound(id))
    }

    pub(crate) async fn remove(&self, id: MatchId) -> Result<()> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RuntimeError::MatchNotFound(id))
    }

    pub(crate) async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
