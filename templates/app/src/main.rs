use std::sync::Arc;

use serde_json::json;
use tracing::info;

use cqrs_scaffold::master::{
    CommandModuleOptions, DataSyncDispatcher, MasterSettingService, MemoryMasterStore,
};
use cqrs_scaffold::utils::bootstrap::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let store = Arc::new(MemoryMasterStore::new());
    let dispatcher = Arc::new(DataSyncDispatcher::new(CommandModuleOptions::new("master")));
    let service = MasterSettingService::new(store, dispatcher);

    let saved = service
        .save_setting(
            "tenantA",
            "master_setting",
            "currency",
            "Currency",
            json!({ "default": "JPY" }),
        )
        .await?;
    info!(pk = %saved.pk, sk = %saved.sk, "setting written");

    let found = service
        .get_setting("tenantA", "master_setting", "currency")
        .await?;
    info!(name = %found.name, version = found.version, "setting read back");

    Ok(())
}
