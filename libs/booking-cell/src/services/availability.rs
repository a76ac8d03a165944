// libs/booking-cell/src/services/availability.rs
use std::sync::Arc;

use tracing::debug;

use shared_database::{
    AppointmentFilter, AppointmentStore, ClinicStore, DoctorFilter, DoctorStore,
};
use shared_models::DEFAULT_SLOTS;

use crate::models::{BookingError, SlotStatus};

/// Slot occupancy checks against the shared appointment set. Slot identity
/// is the exact (specialty, date, time) string tuple; the doctor assigned to
/// an appointment never narrows the check.
pub struct AvailabilityService {
    store: Arc<dyn ClinicStore>,
}

impl AvailabilityService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    /// True iff an existing appointment already occupies the tuple.
    pub async fn is_slot_booked(
        &self,
        specialty: &str,
        date: &str,
        time: &str,
    ) -> Result<bool, BookingError> {
        let occupying = self
            .store
            .query_appointments(AppointmentFilter {
                specialty: Some(specialty.to_string()),
                date: Some(date.to_string()),
                time: Some(time.to_string()),
                ..Default::default()
            })
            .await?;

        Ok(!occupying.is_empty())
    }

    /// One entry per candidate time for the day, in the candidate list's
    /// declared order. The candidate list is the selected doctor's
    /// configured slots when non-empty, the global default list otherwise.
    pub async fn slots_for_day(
        &self,
        specialty: &str,
        date: &str,
        doctor: Option<&str>,
    ) -> Result<Vec<SlotStatus>, BookingError> {
        let candidates = self.candidate_slots(doctor).await?;
        debug!(
            "Checking {} candidate slots for {} on {}",
            candidates.len(),
            specialty,
            date
        );

        let mut slots = Vec::with_capacity(candidates.len());
        for time in candidates {
            let booked = self.is_slot_booked(specialty, date, &time).await?;
            slots.push(SlotStatus { time, booked });
        }
        Ok(slots)
    }

    async fn candidate_slots(&self, doctor: Option<&str>) -> Result<Vec<String>, BookingError> {
        if let Some(name) = doctor {
            let doctors = self
                .store
                .query_doctors(DoctorFilter {
                    name: Some(name.to_string()),
                    ..Default::default()
                })
                .await?;

            if let Some(doc) = doctors.into_iter().next() {
                if !doc.slots.is_empty() {
                    return Ok(doc.slots);
                }
            }
        }

        Ok(DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect())
    }
}
