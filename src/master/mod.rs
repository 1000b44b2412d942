//! Master-setting module.
//!
//! Tenant-scoped master data addressed by `(PK, SK)` pairs in a key-value
//! store. The store itself is an external collaborator; this module carries
//! the record model, the store seam, an in-memory implementation, the
//! service, and the data-sync fan-out that runs after every write.

mod memory;
mod model;
mod service;
mod store;
mod sync;

pub use memory::MemoryMasterStore;
pub use model::MasterSettingRecord;
pub use service::{MasterError, MasterSettingService, Result as MasterResult};
pub use store::{MasterStore, Result as StoreResult, StorageError};
pub use sync::{
    CommandModuleOptions, DataSyncDispatcher, DataSyncHandler, Result as SyncResult, SyncError,
};
