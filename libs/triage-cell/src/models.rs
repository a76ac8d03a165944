// libs/triage-cell/src/models.rs
use serde::{Deserialize, Serialize};

/// Answer-record field names, one per question node.
pub mod keys {
    pub const MAIN_SYMPTOM: &str = "mainSymptom";
    pub const SYMPTOM_DURATION: &str = "symptomDuration";
    pub const PAIN_LEVEL: &str = "painLevel";
    pub const FEVER: &str = "fever";
    pub const ADDITIONAL_SYMPTOMS: &str = "additionalSymptoms";
    pub const MEDICATION: &str = "medication";
    pub const EXISTING_CONDITIONS: &str = "existingConditions";
    pub const ADDITIONAL_INFO: &str = "additionalInfo";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    pub key: String,
    pub value: String,
}

/// The ordered (question-key, answer) pairs accumulated over one
/// conversational run. Submission order is preserved; a resubmitted key
/// overwrites its previous value in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answers(Vec<Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// The answer lowercased, or empty when the question was never answered.
    pub fn lower(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_lowercase()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.0.iter_mut().find(|a| a.key == key) {
            Some(existing) => existing.value = value.to_string(),
            None => self.0.push(Answer {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Select,
    Text,
}

/// One presentable question: stable key, prompt (possibly specialized from
/// earlier answers), and its selectable options when `kind` is `Select`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Question {
    pub id: u8,
    pub key: &'static str,
    pub prompt: String,
    pub kind: QuestionKind,
    pub options: Vec<&'static str>,
}

/// A single conversational run. Ephemeral: the caller owns it, nothing is
/// persisted, restart discards everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriageSession {
    pub answers: Answers,
    pub step: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Urgent,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Mild => write!(f, "leve"),
            Severity::Moderate => write!(f, "moderada"),
            Severity::Urgent => write!(f, "alta"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnosis {
    pub specialty: String,
    pub severity: Severity,
    pub advice_text: String,
}
