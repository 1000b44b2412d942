//! MasterStore trait definition.

use async_trait::async_trait;

use super::MasterSettingRecord;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("record not found: pk={pk}, sk={sk}")]
    NotFound { pk: String, sk: String },

    #[error("malformed persisted key: {0}")]
    MalformedKey(#[from] crate::keys::KeyError),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Interface for master-data persistence.
///
/// Records are addressed by `(pk, sk)`; both stay flat strings at this
/// boundary to match the store's native key type. Key composition and
/// decomposition happen in the callers, via [`crate::keys`].
///
/// Implementations:
/// - `MemoryMasterStore`: in-memory store for local development and tests
#[async_trait]
pub trait MasterStore: Send + Sync {
    /// Fetch a single record.
    async fn get(&self, pk: &str, sk: &str) -> Result<MasterSettingRecord>;

    /// Insert or replace a record.
    async fn put(&self, record: MasterSettingRecord) -> Result<()>;

    /// List all records in a partition, ordered by sort key.
    async fn query(&self, pk: &str) -> Result<Vec<MasterSettingRecord>>;
}
