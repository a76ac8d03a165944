pub mod memory;
pub mod store;
pub mod supabase;

use std::sync::Arc;

use shared_config::{AppConfig, StorageBackend};

pub use memory::MemoryStore;
pub use store::{
    AppointmentFilter, AppointmentStore, ClinicStore, DoctorFilter, DoctorStore, StoreError,
    UserStore,
};
pub use supabase::SupabaseStore;

/// Build the storage collaborator selected by configuration. Called once at
/// process start; every cell shares the returned handle.
pub fn connect(config: &AppConfig) -> Arc<dyn ClinicStore> {
    match config.resolved_backend() {
        StorageBackend::Remote => {
            tracing::info!("Using remote store at {}", config.supabase_url);
            Arc::new(SupabaseStore::new(config))
        }
        StorageBackend::Embedded => {
            tracing::info!("Using embedded in-process store");
            Arc::new(MemoryStore::new())
        }
    }
}
