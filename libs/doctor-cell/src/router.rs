// libs/doctor-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use shared_database::ClinicStore;

use crate::handlers;

pub fn doctor_routes(store: Arc<dyn ClinicStore>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_doctors).post(handlers::create_doctor),
        )
        .route("/{doctor_id}", delete(handlers::delete_doctor))
        .with_state(store)
}
