pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{PatientError, PublicProfile};
pub use services::account::AccountService;
