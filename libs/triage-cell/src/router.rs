// libs/triage-cell/src/router.rs
use axum::{routing::post, Router};

use crate::handlers;

pub fn triage_routes() -> Router {
    Router::new()
        .route("/next", post(handlers::next_question))
        .route("/answer", post(handlers::submit_answer))
        .route("/diagnose", post(handlers::diagnose))
}
