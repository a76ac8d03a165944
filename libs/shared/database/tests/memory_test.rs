use assert_matches::assert_matches;
use std::sync::Arc;

use shared_database::{AppointmentFilter, MemoryStore, StoreError};
use shared_database::store::AppointmentStore;
use shared_models::AppointmentDraft;

fn draft(specialty: &str, date: &str, time: &str, email: &str) -> AppointmentDraft {
    AppointmentDraft {
        user_email: email.to_string(),
        specialty: specialty.to_string(),
        doctor: None,
        date: date.to_string(),
        time: time.to_string(),
        client_name: "Ana".to_string(),
        reason: "control".to_string(),
    }
}

#[tokio::test]
async fn insert_enforces_slot_uniqueness() {
    let store = MemoryStore::new();

    store
        .insert_appointment(draft("Medicina General", "2025-06-01", "09:00", "ana@example.com"))
        .await
        .unwrap();

    let err = store
        .insert_appointment(draft("Medicina General", "2025-06-01", "09:00", "luis@example.com"))
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::UniqueViolation(_));

    // A different specialty at the same time is a different slot.
    store
        .insert_appointment(draft("Cardiología", "2025-06-01", "09:00", "luis@example.com"))
        .await
        .unwrap();
}

#[tokio::test]
async fn concurrent_inserts_admit_exactly_one() {
    let store = Arc::new(MemoryStore::new());

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .insert_appointment(draft(
                    "Nutrición",
                    "2025-06-02",
                    "10:00",
                    &format!("user{}@example.com", i),
                ))
                .await
        }));
    }

    let mut winners = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(StoreError::UniqueViolation(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(winners, 1);
    assert_eq!(conflicts, 7);
}

#[tokio::test]
async fn delete_reports_removed_count_and_frees_the_slot() {
    let store = MemoryStore::new();

    let stored = store
        .insert_appointment(draft("Odontología", "2025-06-03", "11:00", "ana@example.com"))
        .await
        .unwrap();

    assert_eq!(store.delete_appointment(stored.id).await.unwrap(), 1);
    assert_eq!(store.delete_appointment(stored.id).await.unwrap(), 0);

    // Identifier is gone, slot is reusable.
    store
        .insert_appointment(draft("Odontología", "2025-06-03", "11:00", "luis@example.com"))
        .await
        .unwrap();
}

#[tokio::test]
async fn query_orders_by_date_and_time() {
    let store = MemoryStore::new();

    store
        .insert_appointment(draft("Medicina General", "2025-06-05", "14:00", "ana@example.com"))
        .await
        .unwrap();
    store
        .insert_appointment(draft("Medicina General", "2025-06-04", "16:00", "ana@example.com"))
        .await
        .unwrap();
    store
        .insert_appointment(draft("Medicina General", "2025-06-05", "09:00", "ana@example.com"))
        .await
        .unwrap();

    let rows = store
        .query_appointments(AppointmentFilter {
            user_email: Some("ana@example.com".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|a| (a.date.as_str(), a.time.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("2025-06-04", "16:00"),
            ("2025-06-05", "09:00"),
            ("2025-06-05", "14:00"),
        ]
    );
}
