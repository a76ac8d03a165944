// libs/booking-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_database::ClinicStore;
use shared_models::{AppError, AppointmentDraft};

use crate::services::booking::BookingService;

#[derive(Debug, Deserialize)]
pub struct SlotBoardQuery {
    pub specialty: String,
    pub date: String,
    pub doctor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserAppointmentsQuery {
    pub user_email: String,
}

#[derive(Debug, Deserialize)]
pub struct CancelQuery {
    pub requester: String,
    #[serde(default)]
    pub admin: bool,
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(store): State<Arc<dyn ClinicStore>>,
    Json(draft): Json<AppointmentDraft>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(store);

    let appointment = booking_service.book(draft).await?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(store): State<Arc<dyn ClinicStore>>,
    Path(appointment_id): Path<Uuid>,
    Query(query): Query<CancelQuery>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(store);

    let removed = booking_service
        .cancel(appointment_id, &query.requester, query.admin)
        .await?;

    Ok(Json(json!({ "cancelled": removed })))
}

#[axum::debug_handler]
pub async fn list_user_appointments(
    State(store): State<Arc<dyn ClinicStore>>,
    Query(query): Query<UserAppointmentsQuery>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(store);

    let appointments = booking_service.list_for_user(&query.user_email).await?;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn list_all_appointments(
    State(store): State<Arc<dyn ClinicStore>>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(store);

    let appointments = booking_service.list_all().await?;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

/// The requester's earliest upcoming appointment, if any. Rows whose
/// date/time strings fail to parse are skipped, not errors.
#[axum::debug_handler]
pub async fn get_next_appointment(
    State(store): State<Arc<dyn ClinicStore>>,
    Query(query): Query<UserAppointmentsQuery>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(store);

    let appointments = booking_service.list_for_user(&query.user_email).await?;
    let now = chrono::Utc::now().naive_utc();
    let next = crate::services::schedule::next_appointment(&appointments, now);

    Ok(Json(json!({ "next": next })))
}

#[axum::debug_handler]
pub async fn get_appointment_stats(
    State(store): State<Arc<dyn ClinicStore>>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(store);

    let stats = booking_service.stats().await?;

    Ok(Json(json!(stats)))
}

#[axum::debug_handler]
pub async fn get_slot_board(
    State(store): State<Arc<dyn ClinicStore>>,
    Query(query): Query<SlotBoardQuery>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(store);

    let slots = booking_service
        .availability()
        .slots_for_day(&query.specialty, &query.date, query.doctor.as_deref())
        .await?;

    Ok(Json(json!({
        "specialty": query.specialty,
        "date": query.date,
        "slots": slots
    })))
}
