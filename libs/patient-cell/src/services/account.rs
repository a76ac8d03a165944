// libs/patient-cell/src/services/account.rs
use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{ClinicStore, UserStore};
use shared_models::UserAccount;

use crate::models::{LoginRequest, PatientError, PublicProfile, RegisterRequest, UpdateProfileRequest};

/// Patient account management. Passwords are opaque values compared for
/// equality; real credential handling lives outside this system.
pub struct AccountService {
    store: Arc<dyn ClinicStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<PublicProfile, PatientError> {
        debug!("Registering account for {}", request.email);

        let user = UserAccount {
            id: Uuid::new_v4(),
            email: request.email,
            name: request.name,
            password: request.password,
            phone: request.phone,
            birthdate: request.birthdate,
            gender: request.gender,
            allergies: request.allergies,
        };

        let stored = self.store.insert_user(user).await?;
        info!("Account {} registered", stored.email);
        Ok(stored.into())
    }

    pub async fn login(&self, request: LoginRequest) -> Result<PublicProfile, PatientError> {
        let user = self
            .store
            .find_user(&request.email)
            .await?
            .ok_or(PatientError::UserNotFound)?;

        if user.password != request.password {
            return Err(PatientError::WrongPassword);
        }

        debug!("Login for {}", user.email);
        Ok(user.into())
    }

    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<PublicProfile, PatientError> {
        let mut user = self
            .store
            .find_user(&request.email)
            .await?
            .ok_or(PatientError::UserNotFound)?;

        if let Some(name) = request.name {
            user.name = name;
        }
        user.phone = request.phone.or(user.phone);
        user.birthdate = request.birthdate.or(user.birthdate);
        user.gender = request.gender.or(user.gender);
        user.allergies = request.allergies.or(user.allergies);

        let updated = self.store.update_user(user).await?;
        info!("Profile updated for {}", updated.email);
        Ok(updated.into())
    }
}
