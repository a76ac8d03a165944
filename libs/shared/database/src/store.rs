// libs/shared/database/src/store.rs
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use shared_models::{Appointment, AppointmentDraft, Doctor, DoctorDraft, UserAccount};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The write collided with an existing record under a uniqueness
    /// constraint. For appointments this is the authoritative slot-conflict
    /// signal; the booking engine's pre-check is only advisory.
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("record not found")]
    NotFound,

    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub id: Option<Uuid>,
    pub user_email: Option<String>,
    pub specialty: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DoctorFilter {
    pub specialty: Option<String>,
    pub name: Option<String>,
}

/// Appointment persistence. `query_appointments` returns rows ordered by
/// (date, time) ascending with insertion order breaking ties; reads reflect
/// all writes previously acknowledged to this process.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn insert_appointment(&self, draft: AppointmentDraft) -> Result<Appointment, StoreError>;

    /// Hard delete. Returns the number of records removed (0 or 1).
    async fn delete_appointment(&self, id: Uuid) -> Result<u64, StoreError>;

    async fn query_appointments(
        &self,
        filter: AppointmentFilter,
    ) -> Result<Vec<Appointment>, StoreError>;
}

/// Doctor records, ordered by (specialty, name) ascending on query.
#[async_trait]
pub trait DoctorStore: Send + Sync {
    async fn insert_doctor(&self, draft: DoctorDraft) -> Result<Doctor, StoreError>;

    async fn delete_doctor(&self, id: Uuid) -> Result<u64, StoreError>;

    async fn query_doctors(&self, filter: DoctorFilter) -> Result<Vec<Doctor>, StoreError>;
}

/// Patient accounts, keyed by unique email.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: UserAccount) -> Result<UserAccount, StoreError>;

    async fn find_user(&self, email: &str) -> Result<Option<UserAccount>, StoreError>;

    async fn update_user(&self, user: UserAccount) -> Result<UserAccount, StoreError>;
}

/// The full storage collaborator the cells share.
pub trait ClinicStore: AppointmentStore + DoctorStore + UserStore {}

impl<T: AppointmentStore + DoctorStore + UserStore> ClinicStore for T {}
