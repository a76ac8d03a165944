// libs/booking-cell/src/models.rs
use serde::{Deserialize, Serialize};

use shared_database::StoreError;
use shared_models::AppError;

/// One row of a day's slot board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotStatus {
    pub time: String,
    pub booked: bool,
}

/// Whether a stored appointment lies in the past or the future relative to
/// some reference instant. Unparsable date/time strings classify as
/// `Unknown` instead of erroring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Past,
    Upcoming,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyCount {
    pub specialty: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentStats {
    pub total_appointments: u64,
    pub distinct_specialties: u64,
    pub by_specialty: Vec<SpecialtyCount>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookingError {
    #[error("Appointment slot no longer available")]
    Conflict,

    #[error("Appointment not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            // A uniqueness violation at commit time is the authoritative
            // conflict signal, regardless of what the pre-check saw.
            StoreError::UniqueViolation(_) => BookingError::Conflict,
            StoreError::NotFound => BookingError::NotFound,
            StoreError::Backend(msg) => BookingError::Storage(msg),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Conflict => AppError::Conflict(err.to_string()),
            BookingError::NotFound => AppError::NotFound(err.to_string()),
            BookingError::Storage(msg) => AppError::Database(msg),
        }
    }
}
