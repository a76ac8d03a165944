// libs/booking-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use shared_database::ClinicStore;

use crate::handlers;

pub fn booking_routes(store: Arc<dyn ClinicStore>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::book_appointment).get(handlers::list_user_appointments),
        )
        .route("/all", get(handlers::list_all_appointments))
        .route("/next", get(handlers::get_next_appointment))
        .route("/stats", get(handlers::get_appointment_stats))
        .route("/slots", get(handlers::get_slot_board))
        .route("/{appointment_id}", delete(handlers::cancel_appointment))
        .with_state(store)
}
