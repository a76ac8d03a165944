// libs/triage-cell/src/handlers.rs
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::AppError;

use crate::models::{Answers, TriageSession};
use crate::services::{advice, questions, session};

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub session: TriageSession,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct DiagnoseRequest {
    pub answers: Answers,
}

/// The advisor holds no state: the caller sends its session back on every
/// call and receives the updated one.
#[axum::debug_handler]
pub async fn next_question(
    Json(triage_session): Json<TriageSession>,
) -> Result<Json<Value>, AppError> {
    let question = questions::next_question(&triage_session.answers, triage_session.step);
    let terminal = question.is_none();

    Ok(Json(json!({
        "question": question,
        "terminal": terminal
    })))
}

#[axum::debug_handler]
pub async fn submit_answer(
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<Value>, AppError> {
    let contextual = questions::contextual_response(&request.key, &request.value);
    let updated = session::submit_answer(request.session, &request.key, &request.value);
    let question = session::current_question(&updated);
    let terminal = question.is_none();

    Ok(Json(json!({
        "session": updated,
        "contextual_response": contextual,
        "question": question,
        "terminal": terminal
    })))
}

#[axum::debug_handler]
pub async fn diagnose(Json(request): Json<DiagnoseRequest>) -> Result<Json<Value>, AppError> {
    let diagnosis = advice::diagnose(&request.answers);

    Ok(Json(json!(diagnosis)))
}
