//! Data-sync handler wiring.
//!
//! After a master-setting write, the service fans the record out to a set
//! of registered handlers that replicate it into read-model stores.
//! Handlers are declared once per command module and run in registration
//! order; they are independent replicators, so one failing does not stop
//! the rest.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use super::MasterSettingRecord;

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that can occur during data-sync dispatch.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// One or more handlers failed; the remaining handlers still ran.
    #[error("data-sync handlers failed: {failed:?}")]
    HandlersFailed { failed: Vec<String> },

    #[error("handler '{name}' failed: {message}")]
    Handler { name: String, message: String },
}

/// Replicates a written master-setting record into a read model.
#[async_trait]
pub trait DataSyncHandler: Send + Sync {
    /// Handler name, used in registration logs and failure reports.
    fn name(&self) -> &str;

    /// Apply a newly written record to the read model.
    async fn up(&self, record: &MasterSettingRecord) -> Result<()>;
}

/// Declarative wiring for a command module: the table it owns and the
/// data-sync handlers notified after each write.
pub struct CommandModuleOptions {
    pub table_name: String,
    pub data_sync_handlers: Vec<Arc<dyn DataSyncHandler>>,
}

impl CommandModuleOptions {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            data_sync_handlers: Vec::new(),
        }
    }

    pub fn with_handler(mut self, handler: Arc<dyn DataSyncHandler>) -> Self {
        self.data_sync_handlers.push(handler);
        self
    }
}

/// Fans written records out to the registered data-sync handlers.
pub struct DataSyncDispatcher {
    table_name: String,
    handlers: Vec<Arc<dyn DataSyncHandler>>,
}

impl DataSyncDispatcher {
    pub fn new(options: CommandModuleOptions) -> Self {
        info!(
            table = %options.table_name,
            handlers = options.data_sync_handlers.len(),
            "command module registered"
        );
        Self {
            table_name: options.table_name,
            handlers: options.data_sync_handlers,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Run every handler against the record, in registration order.
    ///
    /// Failures are collected and reported together after all handlers
    /// have run. Each dispatch carries a generated correlation id so the
    /// fan-out can be traced across read models.
    pub async fn dispatch(&self, record: &MasterSettingRecord) -> Result<()> {
        let correlation_id = Uuid::new_v4().to_string();
        let mut failed = Vec::new();

        for handler in &self.handlers {
            match handler.up(record).await {
                Ok(()) => info!(
                    handler = handler.name(),
                    correlation_id = %correlation_id,
                    pk = %record.pk,
                    sk = %record.sk,
                    "data sync applied"
                ),
                Err(e) => {
                    error!(
                        handler = handler.name(),
                        correlation_id = %correlation_id,
                        pk = %record.pk,
                        sk = %record.sk,
                        error = %e,
                        "data sync failed"
                    );
                    failed.push(handler.name().to_string());
                }
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(SyncError::HandlersFailed { failed })
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use tokio::sync::RwLock;

    use super::*;

    fn record() -> MasterSettingRecord {
        MasterSettingRecord {
            pk: "MASTER#t".to_string(),
            sk: "g#c".to_string(),
            code: "c".to_string(),
            name: String::new(),
            version: 1,
            attributes: json!({}),
            updated_at: Utc::now(),
        }
    }

    struct RecordingSyncHandler {
        name: String,
        seen: RwLock<Vec<String>>,
    }

    impl RecordingSyncHandler {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                seen: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DataSyncHandler for RecordingSyncHandler {
        fn name(&self) -> &str {
            &self.name
        }

        async fn up(&self, record: &MasterSettingRecord) -> Result<()> {
            self.seen.write().await.push(record.sk.clone());
            Ok(())
        }
    }

    struct FailingSyncHandler;

    #[async_trait]
    impl DataSyncHandler for FailingSyncHandler {
        fn name(&self) -> &str {
            "failing"
        }

        async fn up(&self, _record: &MasterSettingRecord) -> Result<()> {
            Err(SyncError::Handler {
                name: "failing".to_string(),
                message: "read model unavailable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_dispatch_reaches_every_handler() {
        let first = Arc::new(RecordingSyncHandler::new("first"));
        let second = Arc::new(RecordingSyncHandler::new("second"));
        let dispatcher = DataSyncDispatcher::new(
            CommandModuleOptions::new("master")
                .with_handler(first.clone())
                .with_handler(second.clone()),
        );

        dispatcher.dispatch(&record()).await.unwrap();

        assert_eq!(*first.seen.read().await, vec!["g#c"]);
        assert_eq!(*second.seen.read().await, vec!["g#c"]);
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_remaining_handlers() {
        let survivor = Arc::new(RecordingSyncHandler::new("survivor"));
        let dispatcher = DataSyncDispatcher::new(
            CommandModuleOptions::new("master")
                .with_handler(Arc::new(FailingSyncHandler))
                .with_handler(survivor.clone()),
        );

        let err = dispatcher.dispatch(&record()).await.unwrap_err();
        assert!(matches!(
            err,
            SyncError::HandlersFailed { ref failed } if failed == &vec!["failing".to_string()]
        ));
        assert_eq!(survivor.seen.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_without_handlers_is_a_no_op() {
        let dispatcher = DataSyncDispatcher::new(CommandModuleOptions::new("master"));
        dispatcher.dispatch(&record()).await.unwrap();
        assert_eq!(dispatcher.table_name(), "master");
    }
}
