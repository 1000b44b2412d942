//! In-memory MasterStore for local development and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{MasterStore, Result, StorageError};
use super::MasterSettingRecord;

/// Master store that keeps records in memory.
///
/// Entries are keyed by `(pk, sk)`, so `query` returns records in sort-key
/// order without extra sorting.
#[derive(Default)]
pub struct MemoryMasterStore {
    records: RwLock<BTreeMap<(String, String), MasterSettingRecord>>,
    fail_on_put: RwLock<bool>,
}

impl MemoryMasterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `put` fail, for error-path tests.
    pub async fn set_fail_on_put(&self, fail: bool) {
        *self.fail_on_put.write().await = fail;
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl MasterStore for MemoryMasterStore {
    async fn get(&self, pk: &str, sk: &str) -> Result<MasterSettingRecord> {
        let records = self.records.read().await;
        records
            .get(&(pk.to_string(), sk.to_string()))
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                pk: pk.to_string(),
                sk: sk.to_string(),
            })
    }

    async fn put(&self, record: MasterSettingRecord) -> Result<()> {
        if *self.fail_on_put.read().await {
            return Err(StorageError::Backend("injected failure".to_string()));
        }
        let mut records = self.records.write().await;
        records.insert((record.pk.clone(), record.sk.clone()), record);
        Ok(())
    }

    async fn query(&self, pk: &str) -> Result<Vec<MasterSettingRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|record| record.pk == pk)
            .cloned()
            .collect())
    }
}
