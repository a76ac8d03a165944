use std::env;
use tracing::warn;

/// Which storage collaborator the process talks to. Chosen once at startup;
/// nothing downstream branches on it per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Embedded,
    Remote,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let requested = env::var("STORAGE_BACKEND")
            .map(|v| v.to_lowercase())
            .unwrap_or_else(|_| "embedded".to_string());

        let config = Self {
            storage_backend: match requested.as_str() {
                "remote" => StorageBackend::Remote,
                "embedded" => StorageBackend::Embedded,
                other => {
                    warn!("Unknown STORAGE_BACKEND '{}', using embedded store", other);
                    StorageBackend::Embedded
                }
            },
            supabase_url: env::var("SUPABASE_URL").unwrap_or_else(|_| {
                warn!("SUPABASE_URL not set, using empty value");
                String::new()
            }),
            supabase_anon_key: env::var("SUPABASE_ANON_PUBLIC_KEY").unwrap_or_else(|_| {
                warn!("SUPABASE_ANON_PUBLIC_KEY not set, using empty value");
                String::new()
            }),
        };

        if config.storage_backend == StorageBackend::Remote && !config.is_remote_configured() {
            warn!("Remote storage requested but not fully configured");
        }

        config
    }

    pub fn is_remote_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }

    /// The backend the process will actually use: remote only when its
    /// connection settings are complete, embedded otherwise.
    pub fn resolved_backend(&self) -> StorageBackend {
        match self.storage_backend {
            StorageBackend::Remote if self.is_remote_configured() => StorageBackend::Remote,
            StorageBackend::Remote => {
                warn!("Falling back to embedded store: remote settings incomplete");
                StorageBackend::Embedded
            }
            StorageBackend::Embedded => StorageBackend::Embedded,
        }
    }
}
