// libs/shared/models/src/records.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of specialties offered by the clinic, in canonical order.
/// Every scoring or tie-breaking pass over specialties iterates this order.
pub const SPECIALTIES: [&str; 5] = [
    "Medicina General",
    "Obstetricia",
    "Cardiología",
    "Odontología",
    "Nutrición",
];

/// Global default slot list, used whenever a doctor has no configured slots.
pub const DEFAULT_SLOTS: [&str; 5] = ["09:00", "10:00", "11:00", "14:00", "16:00"];

/// A committed appointment. Date and time are kept as the exact strings the
/// patient booked with (`YYYY-MM-DD` / `HH:MM`); slot equality is string
/// equality, never parsed-and-compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub user_email: String,
    pub specialty: String,
    pub doctor: Option<String>,
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub reason: String,
}

/// Everything a booking request carries before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub user_email: String,
    pub specialty: String,
    pub doctor: Option<String>,
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub shift: Option<String>,
    /// Offered time-of-day strings, in the doctor's declared order.
    /// Empty means "use DEFAULT_SLOTS".
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorDraft {
    pub name: String,
    pub specialty: String,
    pub shift: Option<String>,
    #[serde(default)]
    pub slots: Vec<String>,
}

/// A patient account. The password is opaque and equality-compared only;
/// handlers never serialize it back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
    pub birthdate: Option<String>,
    pub gender: Option<String>,
    pub allergies: Option<String>,
}
