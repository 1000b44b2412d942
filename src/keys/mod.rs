//! Partition/sort key codec for the master-data store.
//!
//! Records are addressed by a flat-string partition key and sort key, each
//! built from exactly two segments joined by [`KEY_SEPARATOR`]. The
//! separator and the fixed prefixes are process-wide constants shared by
//! every producer and consumer of keys; changing them is a breaking schema
//! migration for already-persisted data.
//!
//! Segment values must not contain the separator. Composition does not
//! escape, so a separator smuggled into a tenant or setting code yields a
//! key that later fails to parse.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator joining key segments.
pub const KEY_SEPARATOR: &str = "#";

/// Type tag of master-data partition keys.
pub const MASTER_PK_PREFIX: &str = "MASTER";

/// Setting-group code of master-setting sort keys.
pub const SETTING_SK_PREFIX: &str = "master_setting";

/// Result type for key parsing.
pub type Result<T> = std::result::Result<T, KeyError>;

/// Errors raised when decoding stored keys.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The key does not split into the expected number of segments.
    #[error("malformed {kind} key: {value:?}")]
    Malformed {
        /// Which kind of key failed.
        kind: KeyKind,
        /// The offending string, verbatim.
        value: String,
    },
}

/// Which kind of key failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Partition,
    Sort,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Partition => write!(f, "partition"),
            KeyKind::Sort => write!(f, "sort"),
        }
    }
}

/// Decoded master-data partition key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionKey {
    /// Fixed type tag, [`MASTER_PK_PREFIX`] for master data.
    pub key_type: String,
    /// Tenant the partition belongs to.
    pub tenant_code: String,
}

/// Decoded data-setting sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettingKey {
    /// Setting-group code.
    pub setting_code: String,
    /// Item code within the group.
    pub code: String,
}

/// Compose the partition key of a tenant's master data.
pub fn master_pk(tenant_code: &str) -> String {
    format!("{MASTER_PK_PREFIX}{KEY_SEPARATOR}{tenant_code}")
}

/// Compose the sort key of a master-setting definition.
pub fn setting_sk(code: &str) -> String {
    format!("{SETTING_SK_PREFIX}{KEY_SEPARATOR}{code}")
}

/// Compose the sort key of a data item inside a setting group.
pub fn data_setting_sk(setting_code: &str, code: &str) -> String {
    format!("{setting_code}{KEY_SEPARATOR}{code}")
}

/// Decode a partition key into its type tag and tenant code.
///
/// Fails unless splitting on the separator yields exactly two segments;
/// a key with three or more conceptual segments is rejected rather than
/// greedily truncated into two fields.
pub fn parse_pk(pk: &str) -> Result<PartitionKey> {
    let (key_type, tenant_code) = split2(KeyKind::Partition, pk)?;
    Ok(PartitionKey {
        key_type,
        tenant_code,
    })
}

/// Decode a data-setting sort key into its setting group and item code.
pub fn parse_data_setting_sk(sk: &str) -> Result<DataSettingKey> {
    let (setting_code, code) = split2(KeyKind::Sort, sk)?;
    Ok(DataSettingKey { setting_code, code })
}

/// Split into exactly two segments, positionally. No partial result leaks
/// out of a failed parse.
fn split2(kind: KeyKind, value: &str) -> Result<(String, String)> {
    let mut segments = value.split(KEY_SEPARATOR);
    match (segments.next(), segments.next(), segments.next()) {
        (Some(first), Some(second), None) => Ok((first.to_string(), second.to_string())),
        _ => Err(KeyError::Malformed {
            kind,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests;
