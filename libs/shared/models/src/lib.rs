pub mod error;
pub mod records;

pub use error::AppError;
pub use records::{
    Appointment, AppointmentDraft, Doctor, DoctorDraft, UserAccount,
    DEFAULT_SLOTS, SPECIALTIES,
};
