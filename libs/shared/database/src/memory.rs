// libs/shared/database/src/memory.rs
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_models::{Appointment, AppointmentDraft, Doctor, DoctorDraft, UserAccount};

use crate::store::{
    AppointmentFilter, AppointmentStore, DoctorFilter, DoctorStore, StoreError, UserStore,
};

#[derive(Default)]
struct Inner {
    appointments: Vec<Appointment>,
    doctors: Vec<Doctor>,
    users: Vec<UserAccount>,
}

/// Embedded in-process store. A single write lock makes every insert an
/// atomic check-and-commit, so the slot uniqueness invariant holds even
/// under concurrent bookers within this process.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(apt: &Appointment, filter: &AppointmentFilter) -> bool {
    if let Some(id) = filter.id {
        if apt.id != id {
            return false;
        }
    }
    if let Some(email) = &filter.user_email {
        if &apt.user_email != email {
            return false;
        }
    }
    if let Some(specialty) = &filter.specialty {
        if &apt.specialty != specialty {
            return false;
        }
    }
    if let Some(date) = &filter.date {
        if &apt.date != date {
            return false;
        }
    }
    if let Some(time) = &filter.time {
        if &apt.time != time {
            return false;
        }
    }
    true
}

#[async_trait]
impl AppointmentStore for MemoryStore {
    async fn insert_appointment(&self, draft: AppointmentDraft) -> Result<Appointment, StoreError> {
        let mut inner = self.inner.write().await;

        let occupied = inner.appointments.iter().any(|apt| {
            apt.specialty == draft.specialty && apt.date == draft.date && apt.time == draft.time
        });
        if occupied {
            return Err(StoreError::UniqueViolation(format!(
                "slot {} {} {}",
                draft.specialty, draft.date, draft.time
            )));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            user_email: draft.user_email,
            specialty: draft.specialty,
            doctor: draft.doctor,
            date: draft.date,
            time: draft.time,
            client_name: draft.client_name,
            reason: draft.reason,
        };
        debug!("Inserted appointment {}", appointment.id);
        inner.appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.appointments.len();
        inner.appointments.retain(|apt| apt.id != id);
        Ok((before - inner.appointments.len()) as u64)
    }

    async fn query_appointments(
        &self,
        filter: AppointmentFilter,
    ) -> Result<Vec<Appointment>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows: Vec<Appointment> = inner
            .appointments
            .iter()
            .filter(|apt| matches(apt, &filter))
            .cloned()
            .collect();
        // Stable sort keeps insertion order for identical (date, time).
        rows.sort_by(|a, b| (a.date.as_str(), a.time.as_str()).cmp(&(b.date.as_str(), b.time.as_str())));
        Ok(rows)
    }
}

#[async_trait]
impl DoctorStore for MemoryStore {
    async fn insert_doctor(&self, draft: DoctorDraft) -> Result<Doctor, StoreError> {
        let mut inner = self.inner.write().await;
        let doctor = Doctor {
            id: Uuid::new_v4(),
            name: draft.name,
            specialty: draft.specialty,
            shift: draft.shift,
            slots: draft.slots,
        };
        inner.doctors.push(doctor.clone());
        Ok(doctor)
    }

    async fn delete_doctor(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.doctors.len();
        inner.doctors.retain(|doc| doc.id != id);
        Ok((before - inner.doctors.len()) as u64)
    }

    async fn query_doctors(&self, filter: DoctorFilter) -> Result<Vec<Doctor>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows: Vec<Doctor> = inner
            .doctors
            .iter()
            .filter(|doc| {
                filter
                    .specialty
                    .as_ref()
                    .map_or(true, |s| &doc.specialty == s)
                    && filter.name.as_ref().map_or(true, |n| &doc.name == n)
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            (a.specialty.as_str(), a.name.as_str()).cmp(&(b.specialty.as_str(), b.name.as_str()))
        });
        Ok(rows)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: UserAccount) -> Result<UserAccount, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation(format!("email {}", user.email)));
        }
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn find_user(&self, email: &str) -> Result<Option<UserAccount>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_user(&self, user: UserAccount) -> Result<UserAccount, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.users.iter_mut().find(|u| u.email == user.email) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(StoreError::NotFound),
        }
    }
}
