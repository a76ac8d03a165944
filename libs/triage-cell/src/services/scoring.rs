// libs/triage-cell/src/services/scoring.rs
//
// Keyword scoring over the free-text answers, followed by fixed-order
// post-adjustments. Specialties are always iterated in the canonical
// declaration order below, which is also the tie-break order.

use tracing::debug;

use crate::models::{keys, Answers, Severity};

/// Keyword table per specialty, in canonical order. The first entry also
/// serves as the fallback when nothing scores.
pub const SPECIALTY_KEYWORDS: [(&str, &[&str]); 5] = [
    (
        "Medicina General",
        &[
            "síntomas generales",
            "fiebre",
            "malestar general",
            "dolor de cabeza",
            "resfriado",
            "gripe",
            "dolor de garganta",
            "tos",
            "fatiga",
        ],
    ),
    (
        "Obstetricia",
        &[
            "embarazo",
            "gestación",
            "prenatal",
            "parto",
            "menstruación irregular",
            "dolor pélvico",
            "sangrado",
            "contracciones",
            "amenorrea",
            "menstrual",
        ],
    ),
    (
        "Cardiología",
        &[
            "dolor de pecho",
            "palpitaciones",
            "dificultad para respirar",
            "presión arterial",
            "corazón",
            "mareos",
            "desmayos",
            "dolor en el brazo",
            "taquicardia",
            "arritmia",
            "opresión en el pecho",
        ],
    ),
    (
        "Odontología",
        &[
            "dolor de muelas",
            "diente",
            "encías",
            "boca",
            "mandíbula",
            "sangrado de encías",
            "sensibilidad dental",
            "caries",
            "muela",
            "dental",
        ],
    ),
    (
        "Nutrición",
        &[
            "dieta",
            "alimentación",
            "peso",
            "obesidad",
            "desnutrición",
            "intolerancia",
            "alergia alimentaria",
            "nutrición",
            "comida",
            "bajar de peso",
        ],
    ),
];

const KEYWORD_WEIGHT: i32 = 2;

const PAIN_TOP_BANDS: [&str; 2] = ["9-10", "7-8"];

/// Lowercased concatenation of the free-text-bearing answers, the haystack
/// for every keyword match.
pub fn combined_text(answers: &Answers) -> String {
    [
        answers.lower(keys::MAIN_SYMPTOM),
        answers.lower(keys::ADDITIONAL_INFO),
        answers.lower(keys::EXISTING_CONDITIONS),
        answers.lower(keys::ADDITIONAL_SYMPTOMS),
    ]
    .join(" ")
}

fn pain_in_top_bands(answers: &Answers) -> bool {
    let pain = answers.get(keys::PAIN_LEVEL).unwrap_or_default();
    PAIN_TOP_BANDS.iter().any(|band| pain.contains(band))
}

fn fever_positive(answers: &Answers) -> bool {
    let fever = answers.get(keys::FEVER).unwrap_or_default();
    fever == "Sí" || fever.contains("Fiebre")
}

/// Per-specialty scores in canonical order, after post-adjustments.
pub fn score_specialties(answers: &Answers) -> Vec<(&'static str, i32)> {
    let combined = combined_text(answers);

    let mut scores: Vec<(&'static str, i32)> = SPECIALTY_KEYWORDS
        .iter()
        .map(|(specialty, keywords)| {
            let score = keywords
                .iter()
                .filter(|kw| combined.contains(&kw.to_lowercase()))
                .count() as i32
                * KEYWORD_WEIGHT;
            (*specialty, score)
        })
        .collect();

    // Adjustment (a): a fever-positive answer guarantees the generalist a
    // floor score when nothing else matched for it.
    if fever_positive(answers) && scores[0].1 == 0 {
        scores[0].1 = 3;
    }

    // Adjustment (b): intense pain around the chest points at cardiology.
    if pain_in_top_bands(answers) && combined.contains("pecho") {
        scores[2].1 += 5;
    }

    // Adjustment (c): breathing difficulty reinforces cardiology when the
    // chest is involved, and the generalist regardless.
    if combined.contains("dificultad para respirar") || combined.contains("dificultad respirar") {
        if combined.contains("pecho") {
            scores[2].1 += 3;
        }
        scores[0].1 += 2;
    }

    scores
}

/// The recommended specialty: strict maximum score, canonical order breaking
/// ties, generalist fallback when every score is zero.
pub fn recommend_specialty(answers: &Answers) -> &'static str {
    let scores = score_specialties(answers);

    let (mut best, mut best_score) = (SPECIALTY_KEYWORDS[0].0, 0);
    for (specialty, score) in scores.iter().copied() {
        if score > best_score {
            best = specialty;
            best_score = score;
        }
    }

    debug!("Specialty scores {:?} -> {}", scores, best);
    best
}

/// Severity cascade, separate from specialty choice: intense pain or
/// breathing difficulty first, then fever / prolonged duration, else mild.
pub fn severity(answers: &Answers) -> Severity {
    let additional = answers.lower(keys::ADDITIONAL_SYMPTOMS);
    if pain_in_top_bands(answers) || additional.contains("dificultad para respirar") {
        return Severity::Urgent;
    }

    let fever = answers.get(keys::FEVER).unwrap_or_default();
    let duration = answers.get(keys::SYMPTOM_DURATION).unwrap_or_default();
    let beyond_a_week =
        duration.contains("Más de una semana") || duration.contains("Más de un mes");
    if fever == "Sí"
        || fever.contains("Fiebre alta")
        || fever.contains("Más de 39°C")
        || beyond_a_week
    {
        return Severity::Moderate;
    }

    Severity::Mild
}
