pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{Answer, Answers, Diagnosis, Question, QuestionKind, Severity, TriageSession};
pub use services::advice::diagnose;
pub use services::questions::{contextual_response, next_question};
pub use services::scoring::{recommend_specialty, severity};
pub use services::session;
