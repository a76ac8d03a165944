// libs/patient-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{post, put},
    Router,
};

use shared_database::ClinicStore;

use crate::handlers;

pub fn patient_routes(store: Arc<dyn ClinicStore>) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/profile", put(handlers::update_profile))
        .with_state(store)
}
