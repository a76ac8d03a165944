use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use doctor_cell::router::doctor_routes;
use patient_cell::router::patient_routes;
use shared_database::ClinicStore;
use triage_cell::router::triage_routes;

pub fn create_router(store: Arc<dyn ClinicStore>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic scheduling API is running!" }))
        .nest("/appointments", booking_routes(store.clone()))
        .nest("/triage", triage_routes())
        .nest("/doctors", doctor_routes(store.clone()))
        .nest("/patients", patient_routes(store))
}
