// libs/triage-cell/src/services/session.rs
//
// State machine over the question graph: AWAITING_ANSWER(step) advances on
// each recorded answer, skipped nodes are jumped, TERMINAL once the table
// is exhausted. No backward transitions; restart discards everything.

use tracing::debug;

use crate::models::{Question, TriageSession};
use crate::services::questions;

/// The question the session is currently waiting on, or None at terminal.
pub fn current_question(session: &TriageSession) -> Option<Question> {
    questions::next_question(&session.answers, session.step)
}

/// Record an answer and advance. A blank answer is a no-op: the session is
/// returned unchanged and the same question stays pending.
pub fn submit_answer(mut session: TriageSession, key: &str, value: &str) -> TriageSession {
    if value.trim().is_empty() {
        debug!("Ignoring blank answer for {}", key);
        return session;
    }

    session.answers.set(key, value.trim());

    // Step past the node just answered, landing on the next presentable one.
    if let Some(answered) = questions::resolve_index(&session.answers, session.step) {
        session.step = answered + 1;
    }

    session
}

pub fn is_terminal(session: &TriageSession) -> bool {
    current_question(session).is_none()
}

/// Back to AWAITING_ANSWER(0) with all accumulated answers discarded.
pub fn restart(_session: TriageSession) -> TriageSession {
    TriageSession::default()
}
