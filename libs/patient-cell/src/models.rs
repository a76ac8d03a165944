// libs/patient-cell/src/models.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_database::StoreError;
use shared_models::{AppError, UserAccount};

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
    pub birthdate: Option<String>,
    pub gender: Option<String>,
    pub allergies: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub birthdate: Option<String>,
    pub gender: Option<String>,
    pub allergies: Option<String>,
}

/// What account handlers return: the stored record with the password
/// stripped.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub birthdate: Option<String>,
    pub gender: Option<String>,
    pub allergies: Option<String>,
}

impl From<UserAccount> for PublicProfile {
    fn from(user: UserAccount) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            birthdate: user.birthdate,
            gender: user.gender,
            allergies: user.allergies,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatientError {
    #[error("Este correo ya está registrado")]
    EmailTaken,

    #[error("Usuario no encontrado")]
    UserNotFound,

    #[error("Contraseña incorrecta")]
    WrongPassword,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for PatientError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(_) => PatientError::EmailTaken,
            StoreError::NotFound => PatientError::UserNotFound,
            StoreError::Backend(msg) => PatientError::Storage(msg),
        }
    }
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::EmailTaken => AppError::Conflict(err.to_string()),
            PatientError::UserNotFound => AppError::NotFound(err.to_string()),
            PatientError::WrongPassword => AppError::BadRequest(err.to_string()),
            PatientError::Storage(msg) => AppError::Database(msg),
        }
    }
}
