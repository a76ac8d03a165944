use triage_cell::models::{keys, Answers, Severity};
use triage_cell::services::{advice, scoring};

fn answered(pairs: &[(&str, &str)]) -> Answers {
    let mut answers = Answers::new();
    for (key, value) in pairs {
        answers.set(key, value);
    }
    answers
}

#[test]
fn intense_chest_pain_selects_cardiology_and_urgent() {
    let answers = answered(&[
        (keys::MAIN_SYMPTOM, "Dolor en el pecho"),
        (keys::SYMPTOM_DURATION, "Hoy"),
        (keys::PAIN_LEVEL, "9-10 (Muy intenso)"),
        (keys::FEVER, "No"),
        (keys::ADDITIONAL_SYMPTOMS, "Ninguno"),
    ]);

    let diagnosis = advice::diagnose(&answers);
    assert_eq!(diagnosis.specialty, "Cardiología");
    assert_eq!(diagnosis.severity, Severity::Urgent);
    assert!(diagnosis.advice_text.contains("Cardiología"));
}

#[test]
fn free_text_chest_pain_also_triggers_the_boost() {
    let answers = answered(&[
        (keys::MAIN_SYMPTOM, "Otro síntoma general"),
        (keys::ADDITIONAL_INFO, "siento dolor de pecho al caminar"),
        (keys::PAIN_LEVEL, "7-8 (Fuerte)"),
    ]);

    let diagnosis = advice::diagnose(&answers);
    assert_eq!(diagnosis.specialty, "Cardiología");
    assert_eq!(diagnosis.severity, Severity::Urgent);
}

#[test]
fn empty_answers_default_to_general_medicine_and_mild() {
    let answers = Answers::new();

    let diagnosis = advice::diagnose(&answers);
    assert_eq!(diagnosis.specialty, "Medicina General");
    assert_eq!(diagnosis.severity, Severity::Mild);
}

#[test]
fn diagnosis_is_deterministic_for_identical_answers() {
    let answers = answered(&[
        (keys::MAIN_SYMPTOM, "Dolor de cabeza"),
        (keys::SYMPTOM_DURATION, "Hace 4-7 días"),
        (keys::PAIN_LEVEL, "4-6 (Moderado)"),
        (keys::FEVER, "No"),
        (keys::ADDITIONAL_SYMPTOMS, "Náuseas"),
    ]);

    let first = advice::diagnose(&answers);
    let second = advice::diagnose(&answers);
    assert_eq!(first, second);
}

#[test]
fn fever_floor_rule_lands_on_general_medicine() {
    // No keyword matches anywhere, but the fever answer is positive: the
    // generalist gets the floor score of 3 and wins.
    let answers = answered(&[
        (keys::MAIN_SYMPTOM, "Otro síntoma general"),
        (keys::FEVER, "Sí"),
    ]);

    let scores = scoring::score_specialties(&answers);
    assert_eq!(scores[0], ("Medicina General", 3));

    let diagnosis = advice::diagnose(&answers);
    assert_eq!(diagnosis.specialty, "Medicina General");
    assert_eq!(diagnosis.severity, Severity::Moderate);
}

#[test]
fn breathing_difficulty_without_chest_boosts_the_generalist() {
    let answers = answered(&[
        (keys::MAIN_SYMPTOM, "Tos o malestar respiratorio"),
        (keys::ADDITIONAL_SYMPTOMS, "Dificultad para respirar"),
    ]);

    let scores = scoring::score_specialties(&answers);
    // "tos" keyword (2) + breathing adjustment (2); cardiology only gets its
    // own keyword hit, no chest reinforcement.
    assert_eq!(scores[0], ("Medicina General", 4));
    assert_eq!(scores[2], ("Cardiología", 2));

    let diagnosis = advice::diagnose(&answers);
    assert_eq!(diagnosis.specialty, "Medicina General");
    assert_eq!(diagnosis.severity, Severity::Urgent);
}

#[test]
fn month_long_symptoms_rank_at_least_moderate() {
    let answers = answered(&[
        (keys::MAIN_SYMPTOM, "Otro síntoma general"),
        (keys::SYMPTOM_DURATION, "Más de un mes"),
        (keys::FEVER, "No"),
    ]);

    assert_eq!(scoring::severity(&answers), Severity::Moderate);
}

#[test]
fn score_ties_resolve_in_canonical_specialty_order() {
    // One keyword hit each for Obstetricia and Cardiología; the earlier
    // declaration wins the tie.
    let answers = answered(&[
        (keys::MAIN_SYMPTOM, "Otro síntoma general"),
        (keys::ADDITIONAL_INFO, "sangrado y palpitaciones"),
    ]);

    let scores = scoring::score_specialties(&answers);
    assert_eq!(scores[1], ("Obstetricia", 2));
    assert_eq!(scores[2], ("Cardiología", 2));
    assert_eq!(scoring::recommend_specialty(&answers), "Obstetricia");
}

#[test]
fn medication_advice_picks_category_then_tier() {
    let headache = answered(&[
        (keys::MAIN_SYMPTOM, "Dolor de cabeza"),
        (keys::PAIN_LEVEL, "7-8 (Fuerte)"),
    ]);
    let text = advice::medication_advice(&headache, scoring::severity(&headache)).unwrap();
    assert!(text.contains("dolor de cabeza es intenso"));

    let fever = answered(&[
        (keys::MAIN_SYMPTOM, "Fiebre o temperatura elevada"),
        (keys::FEVER, "37.5°C - 38°C (Fiebre leve)"),
    ]);
    let text = advice::medication_advice(&fever, scoring::severity(&fever)).unwrap();
    assert!(text.contains("fiebre"));

    let general = answered(&[
        (keys::MAIN_SYMPTOM, "Malestar general / cuerpo cortado"),
        (keys::PAIN_LEVEL, "4-6 (Moderado)"),
    ]);
    let text = advice::medication_advice(&general, scoring::severity(&general)).unwrap();
    assert!(text.contains("dolor moderado") || text.contains("Para dolor moderado"));

    // No headache, fever, or pain wording at all: no medication tier applies.
    let nothing = answered(&[(keys::MAIN_SYMPTOM, "tos persistente")]);
    assert!(advice::medication_advice(&nothing, scoring::severity(&nothing)).is_none());
}
