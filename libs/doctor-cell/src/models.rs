// libs/doctor-cell/src/models.rs
use shared_database::StoreError;
use shared_models::AppError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Unknown specialty: {0}")]
    UnknownSpecialty(String),

    #[error("Invalid slot time: {0}")]
    InvalidSlot(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for DoctorError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => DoctorError::NotFound,
            StoreError::UniqueViolation(msg) | StoreError::Backend(msg) => {
                DoctorError::Storage(msg)
            }
        }
    }
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound => AppError::NotFound(err.to_string()),
            DoctorError::UnknownSpecialty(_) | DoctorError::InvalidSlot(_) => {
                AppError::ValidationError(err.to_string())
            }
            DoctorError::Storage(msg) => AppError::Database(msg),
        }
    }
}
