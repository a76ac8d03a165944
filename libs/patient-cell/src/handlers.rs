// libs/patient-cell/src/handlers.rs
use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_database::ClinicStore;
use shared_models::AppError;

use crate::models::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::services::account::AccountService;

#[axum::debug_handler]
pub async fn register(
    State(store): State<Arc<dyn ClinicStore>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<Value>, AppError> {
    let account_service = AccountService::new(store);

    let profile = account_service.register(request).await?;

    Ok(Json(json!(profile)))
}

#[axum::debug_handler]
pub async fn login(
    State(store): State<Arc<dyn ClinicStore>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let account_service = AccountService::new(store);

    let profile = account_service.login(request).await?;

    Ok(Json(json!(profile)))
}

#[axum::debug_handler]
pub async fn update_profile(
    State(store): State<Arc<dyn ClinicStore>>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Value>, AppError> {
    let account_service = AccountService::new(store);

    let profile = account_service.update_profile(request).await?;

    Ok(Json(json!(profile)))
}
