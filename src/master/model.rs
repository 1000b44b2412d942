//! Master-setting record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keys::{self, DataSettingKey, PartitionKey, Result as KeyResult};

/// A master-setting record as persisted in the key-value store.
///
/// `pk` and `sk` keep the flat string shape of the store's native key type;
/// decoded views are available through [`partition_key`](Self::partition_key)
/// and [`sort_key`](Self::sort_key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterSettingRecord {
    /// Partition key, `MASTER#<tenant>`.
    pub pk: String,
    /// Sort key, `<setting group>#<code>`.
    pub sk: String,
    /// Item code, the second sort-key segment.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version, bumped on every write through the service.
    pub version: u64,
    /// Free-form setting payload.
    pub attributes: Value,
    /// Last write time.
    pub updated_at: DateTime<Utc>,
}

impl MasterSettingRecord {
    /// Decode the partition key this record is stored under.
    pub fn partition_key(&self) -> KeyResult<PartitionKey> {
        keys::parse_pk(&self.pk)
    }

    /// Decode the sort key this record is stored under.
    pub fn sort_key(&self) -> KeyResult<DataSettingKey> {
        keys::parse_data_setting_sk(&self.sk)
    }

    /// Tenant the record belongs to, recovered from the partition key.
    pub fn tenant_code(&self) -> KeyResult<String> {
        Ok(self.partition_key()?.tenant_code)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    fn record(pk: &str, sk: &str) -> MasterSettingRecord {
        MasterSettingRecord {
            pk: pk.to_string(),
            sk: sk.to_string(),
            code: "code1".to_string(),
            name: "Code 1".to_string(),
            version: 1,
            attributes: json!({}),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_decoded_views() {
        let record = record("MASTER#tenantA", "master_setting#code1");
        assert_eq!(record.tenant_code().unwrap(), "tenantA");
        let sk = record.sort_key().unwrap();
        assert_eq!(sk.setting_code, "master_setting");
        assert_eq!(sk.code, "code1");
    }

    #[test]
    fn test_malformed_persisted_key_is_an_error() {
        let record = record("MASTER#a#b", "master_setting#code1");
        assert!(record.partition_key().is_err());
    }
}
