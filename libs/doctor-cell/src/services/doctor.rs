// libs/doctor-cell/src/services/doctor.rs
use std::sync::Arc;

use chrono::NaiveTime;
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{ClinicStore, DoctorFilter, DoctorStore};
use shared_models::{Doctor, DoctorDraft, SPECIALTIES};

use crate::models::DoctorError;

/// Administrator-facing doctor record management.
pub struct DoctorService {
    store: Arc<dyn ClinicStore>,
}

impl DoctorService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    /// Create a doctor record. The specialty must belong to the fixed set
    /// and every configured slot must be a valid HH:MM time of day.
    pub async fn create_doctor(&self, draft: DoctorDraft) -> Result<Doctor, DoctorError> {
        if !SPECIALTIES.contains(&draft.specialty.as_str()) {
            return Err(DoctorError::UnknownSpecialty(draft.specialty));
        }

        for slot in &draft.slots {
            if NaiveTime::parse_from_str(slot, "%H:%M").is_err() {
                return Err(DoctorError::InvalidSlot(slot.clone()));
            }
        }

        let doctor = self.store.insert_doctor(draft).await?;
        info!("Doctor {} ({}) created", doctor.name, doctor.id);
        Ok(doctor)
    }

    /// Doctors ordered by (specialty, name), optionally restricted to one
    /// specialty.
    pub async fn list_doctors(&self, specialty: Option<&str>) -> Result<Vec<Doctor>, DoctorError> {
        debug!("Listing doctors (specialty filter: {:?})", specialty);

        let doctors = self
            .store
            .query_doctors(DoctorFilter {
                specialty: specialty.map(|s| s.to_string()),
                ..Default::default()
            })
            .await?;
        Ok(doctors)
    }

    pub async fn delete_doctor(&self, doctor_id: Uuid) -> Result<(), DoctorError> {
        let removed = self.store.delete_doctor(doctor_id).await?;
        if removed == 0 {
            return Err(DoctorError::NotFound);
        }

        info!("Doctor {} deleted", doctor_id);
        Ok(())
    }
}
