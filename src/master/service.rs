//! Master-setting service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use super::store::{MasterStore, StorageError};
use super::sync::{DataSyncDispatcher, SyncError};
use super::MasterSettingRecord;
use crate::keys;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, MasterError>;

/// Errors surfaced by the master-setting service.
#[derive(Debug, thiserror::Error)]
pub enum MasterError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The write was persisted but one or more data-sync handlers failed.
    #[error(transparent)]
    Sync(#[from] SyncError),
}

/// Reads and writes tenant master settings.
///
/// Keys are composed immediately before each store call and parsed back
/// when interpreting query results; the service never holds decoded keys
/// beyond the operation that produced them.
pub struct MasterSettingService {
    store: Arc<dyn MasterStore>,
    dispatcher: Arc<DataSyncDispatcher>,
}

impl MasterSettingService {
    pub fn new(store: Arc<dyn MasterStore>, dispatcher: Arc<DataSyncDispatcher>) -> Self {
        Self { store, dispatcher }
    }

    /// Fetch one setting item.
    pub async fn get_setting(
        &self,
        tenant_code: &str,
        setting_code: &str,
        code: &str,
    ) -> Result<MasterSettingRecord> {
        let pk = keys::master_pk(tenant_code);
        let sk = keys::data_setting_sk(setting_code, code);
        Ok(self.store.get(&pk, &sk).await?)
    }

    /// Fetch a setting-group definition (`master_setting#<code>` sort key).
    pub async fn get_setting_group(
        &self,
        tenant_code: &str,
        code: &str,
    ) -> Result<MasterSettingRecord> {
        let pk = keys::master_pk(tenant_code);
        let sk = keys::setting_sk(code);
        Ok(self.store.get(&pk, &sk).await?)
    }

    /// Write a setting item and fan it out to the data-sync handlers.
    ///
    /// Bumps the stored version when the record already exists. The
    /// version read and the write are two store calls; concurrent saves of
    /// the same key need external serialization. When a sync handler fails
    /// the record is already persisted; the error tells the caller which
    /// read models are stale.
    pub async fn save_setting(
        &self,
        tenant_code: &str,
        setting_code: &str,
        code: &str,
        name: &str,
        attributes: Value,
    ) -> Result<MasterSettingRecord> {
        let pk = keys::master_pk(tenant_code);
        let sk = keys::data_setting_sk(setting_code, code);

        let version = match self.store.get(&pk, &sk).await {
            Ok(existing) => existing.version + 1,
            Err(StorageError::NotFound { .. }) => 1,
            Err(e) => return Err(e.into()),
        };

        let record = MasterSettingRecord {
            pk,
            sk,
            code: code.to_string(),
            name: name.to_string(),
            version,
            attributes,
            updated_at: Utc::now(),
        };
        self.store.put(record.clone()).await?;
        debug!(pk = %record.pk, sk = %record.sk, version, "master setting written");

        self.dispatcher.dispatch(&record).await?;
        Ok(record)
    }

    /// List every item of one setting group for a tenant.
    ///
    /// A query result whose sort key does not decode is surfaced as an
    /// error rather than skipped; a malformed persisted key means the
    /// partition cannot be interpreted.
    pub async fn list_settings(
        &self,
        tenant_code: &str,
        setting_code: &str,
    ) -> Result<Vec<MasterSettingRecord>> {
        let pk = keys::master_pk(tenant_code);
        let records = self.store.query(&pk).await?;

        let mut items = Vec::new();
        for record in records {
            let key = record.sort_key().map_err(StorageError::from)?;
            if key.setting_code == setting_code {
                items.push(record);
            }
        }
        Ok(items)
    }
}
