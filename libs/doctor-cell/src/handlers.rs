// libs/doctor-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_database::ClinicStore;
use shared_models::{AppError, DoctorDraft};

use crate::services::doctor::DoctorService;

#[derive(Debug, Deserialize)]
pub struct DoctorListQuery {
    pub specialty: Option<String>,
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(store): State<Arc<dyn ClinicStore>>,
    Json(draft): Json<DoctorDraft>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(store);

    let doctor = doctor_service.create_doctor(draft).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(store): State<Arc<dyn ClinicStore>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(store);

    let doctors = doctor_service
        .list_doctors(query.specialty.as_deref())
        .await?;

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(store): State<Arc<dyn ClinicStore>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(store);

    doctor_service.delete_doctor(doctor_id).await?;

    Ok(Json(json!({ "deleted": true })))
}
