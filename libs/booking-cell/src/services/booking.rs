// libs/booking-cell/src/services/booking.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_database::{AppointmentFilter, AppointmentStore, ClinicStore};
use shared_models::{Appointment, AppointmentDraft};

use crate::models::{AppointmentStats, BookingError, SpecialtyCount};
use crate::services::availability::AvailabilityService;

pub struct BookingService {
    store: Arc<dyn ClinicStore>,
    availability: AvailabilityService,
}

impl BookingService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        let availability = AvailabilityService::new(Arc::clone(&store));
        Self {
            store,
            availability,
        }
    }

    pub fn availability(&self) -> &AvailabilityService {
        &self.availability
    }

    /// Commit an appointment. Availability is re-checked immediately before
    /// the insert because the caller's slot board may be stale; the check is
    /// advisory only, and the store's uniqueness constraint has the final
    /// word on a concurrent double-book.
    pub async fn book(&self, draft: AppointmentDraft) -> Result<Appointment, BookingError> {
        info!(
            "Booking {} on {} at {} for {}",
            draft.specialty, draft.date, draft.time, draft.user_email
        );

        let taken = self
            .availability
            .is_slot_booked(&draft.specialty, &draft.date, &draft.time)
            .await?;
        if taken {
            warn!(
                "Slot {} {} {} already occupied at re-check",
                draft.specialty, draft.date, draft.time
            );
            return Err(BookingError::Conflict);
        }

        let appointment = self.store.insert_appointment(draft).await?;
        info!("Appointment {} booked", appointment.id);
        Ok(appointment)
    }

    /// Remove an appointment, freeing its slot immediately. Non-admin
    /// requesters may only remove their own; a missing or foreign record is
    /// NotFound either way, so the caller learns nothing about ownership.
    pub async fn cancel(
        &self,
        appointment_id: Uuid,
        requester_email: &str,
        admin: bool,
    ) -> Result<bool, BookingError> {
        debug!("Cancelling appointment {}", appointment_id);

        let found = self
            .store
            .query_appointments(AppointmentFilter {
                id: Some(appointment_id),
                ..Default::default()
            })
            .await?;

        let appointment = found.into_iter().next().ok_or(BookingError::NotFound)?;
        if !admin && appointment.user_email != requester_email {
            warn!(
                "Cancel of {} refused: requester does not own it",
                appointment_id
            );
            return Err(BookingError::NotFound);
        }

        let removed = self.store.delete_appointment(appointment_id).await?;
        if removed == 0 {
            // Deleted concurrently between lookup and removal.
            return Err(BookingError::NotFound);
        }

        info!("Appointment {} cancelled", appointment_id);
        Ok(true)
    }

    /// A user's appointments, (date, time) ascending, insertion order on ties.
    pub async fn list_for_user(&self, email: &str) -> Result<Vec<Appointment>, BookingError> {
        let appointments = self
            .store
            .query_appointments(AppointmentFilter {
                user_email: Some(email.to_string()),
                ..Default::default()
            })
            .await?;
        Ok(appointments)
    }

    /// Every appointment in the store, same ordering as `list_for_user`.
    pub async fn list_all(&self) -> Result<Vec<Appointment>, BookingError> {
        let appointments = self
            .store
            .query_appointments(AppointmentFilter::default())
            .await?;
        Ok(appointments)
    }

    /// Aggregate counts for the administrator report view.
    pub async fn stats(&self) -> Result<AppointmentStats, BookingError> {
        let appointments = self.list_all().await?;

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for apt in &appointments {
            *counts.entry(apt.specialty.clone()).or_insert(0) += 1;
        }

        let mut by_specialty: Vec<SpecialtyCount> = counts
            .into_iter()
            .map(|(specialty, count)| SpecialtyCount { specialty, count })
            .collect();
        by_specialty.sort_by(|a, b| b.count.cmp(&a.count).then(a.specialty.cmp(&b.specialty)));

        Ok(AppointmentStats {
            total_appointments: appointments.len() as u64,
            distinct_specialties: by_specialty.len() as u64,
            by_specialty,
        })
    }
}
