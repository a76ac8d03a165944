use assert_matches::assert_matches;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_config::{AppConfig, StorageBackend};
use shared_database::store::AppointmentStore;
use shared_database::{AppointmentFilter, StoreError, SupabaseStore};
use shared_models::AppointmentDraft;

fn remote_store(server: &MockServer) -> SupabaseStore {
    SupabaseStore::new(&AppConfig {
        storage_backend: StorageBackend::Remote,
        supabase_url: server.uri(),
        supabase_anon_key: "test-anon-key".to_string(),
    })
}

fn draft() -> AppointmentDraft {
    AppointmentDraft {
        user_email: "ana@example.com".to_string(),
        specialty: "Medicina General".to_string(),
        doctor: None,
        date: "2025-06-01".to_string(),
        time: "09:00".to_string(),
        client_name: "Ana".to_string(),
        reason: "control".to_string(),
    }
}

fn appointment_row(id: Uuid) -> serde_json::Value {
    json!({
        "id": id,
        "user_email": "ana@example.com",
        "specialty": "Medicina General",
        "doctor": null,
        "date": "2025-06-01",
        "time": "09:00",
        "client_name": "Ana",
        "reason": "control"
    })
}

#[tokio::test]
async fn insert_parses_the_returned_representation() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([appointment_row(id)])))
        .mount(&server)
        .await;

    let stored = remote_store(&server)
        .insert_appointment(draft())
        .await
        .unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.time, "09:00");
}

#[tokio::test]
async fn unique_violation_maps_the_conflict_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"appointments_slot_key\""
        })))
        .mount(&server)
        .await;

    let err = remote_store(&server)
        .insert_appointment(draft())
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::UniqueViolation(_));
}

#[tokio::test]
async fn query_filters_and_orders_server_side() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("specialty", "eq.Medicina General"))
        .and(query_param("date", "eq.2025-06-01"))
        .and(query_param("order", "date.asc,time.asc,created_at.asc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([appointment_row(Uuid::new_v4())])),
        )
        .mount(&server)
        .await;

    let rows = remote_store(&server)
        .query_appointments(AppointmentFilter {
            specialty: Some("Medicina General".to_string()),
            date: Some("2025-06-01".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn delete_counts_the_returned_rows() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("id", format!("eq.{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([appointment_row(id)])))
        .mount(&server)
        .await;

    let removed = remote_store(&server).delete_appointment(id).await.unwrap();
    assert_eq!(removed, 1);
}

#[tokio::test]
async fn backend_failures_surface_as_backend_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = remote_store(&server)
        .query_appointments(AppointmentFilter::default())
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Backend(_));
}
