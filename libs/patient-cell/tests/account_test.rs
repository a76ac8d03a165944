use std::sync::Arc;

use assert_matches::assert_matches;

use patient_cell::models::{LoginRequest, PatientError, RegisterRequest, UpdateProfileRequest};
use patient_cell::services::account::AccountService;
use shared_database::{ClinicStore, MemoryStore};

fn test_service() -> AccountService {
    let store: Arc<dyn ClinicStore> = Arc::new(MemoryStore::new());
    AccountService::new(store)
}

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        name: "Ana Paciente".to_string(),
        password: "secreta".to_string(),
        phone: Some("555-0101".to_string()),
        birthdate: Some("1990-04-01".to_string()),
        gender: None,
        allergies: None,
    }
}

#[tokio::test]
async fn register_then_login_round_trip() {
    let service = test_service();

    let profile = service.register(register_request("ana@example.com")).await.unwrap();
    assert_eq!(profile.email, "ana@example.com");

    let logged_in = service
        .login(LoginRequest {
            email: "ana@example.com".to_string(),
            password: "secreta".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(logged_in.name, "Ana Paciente");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let service = test_service();

    service.register(register_request("ana@example.com")).await.unwrap();
    let err = service
        .register(register_request("ana@example.com"))
        .await
        .unwrap_err();
    assert_matches!(err, PatientError::EmailTaken);
}

#[tokio::test]
async fn login_failures_distinguish_unknown_user_from_bad_password() {
    let service = test_service();
    service.register(register_request("ana@example.com")).await.unwrap();

    let err = service
        .login(LoginRequest {
            email: "nadie@example.com".to_string(),
            password: "secreta".to_string(),
        })
        .await
        .unwrap_err();
    assert_matches!(err, PatientError::UserNotFound);

    let err = service
        .login(LoginRequest {
            email: "ana@example.com".to_string(),
            password: "equivocada".to_string(),
        })
        .await
        .unwrap_err();
    assert_matches!(err, PatientError::WrongPassword);
}

#[tokio::test]
async fn profile_update_merges_optional_fields() {
    let service = test_service();
    service.register(register_request("ana@example.com")).await.unwrap();

    let updated = service
        .update_profile(UpdateProfileRequest {
            email: "ana@example.com".to_string(),
            name: Some("Ana María Paciente".to_string()),
            phone: None,
            birthdate: None,
            gender: Some("F".to_string()),
            allergies: Some("penicilina".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Ana María Paciente");
    // Untouched fields survive the update.
    assert_eq!(updated.phone.as_deref(), Some("555-0101"));
    assert_eq!(updated.allergies.as_deref(), Some("penicilina"));
}

#[tokio::test]
async fn updating_a_missing_account_is_not_found() {
    let service = test_service();

    let err = service
        .update_profile(UpdateProfileRequest {
            email: "nadie@example.com".to_string(),
            name: None,
            phone: None,
            birthdate: None,
            gender: None,
            allergies: None,
        })
        .await
        .unwrap_err();
    assert_matches!(err, PatientError::UserNotFound);
}
