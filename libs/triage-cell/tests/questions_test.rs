use triage_cell::models::{keys, Answers, TriageSession};
use triage_cell::services::{questions, session};

fn answered(pairs: &[(&str, &str)]) -> Answers {
    let mut answers = Answers::new();
    for (key, value) in pairs {
        answers.set(key, value);
    }
    answers
}

#[test]
fn flow_opens_with_the_main_symptom_question() {
    let session = TriageSession::default();
    let question = session::current_question(&session).unwrap();

    assert_eq!(question.key, keys::MAIN_SYMPTOM);
    assert_eq!(question.options.len(), 8);
}

#[test]
fn pain_question_is_skipped_for_non_pain_symptoms() {
    let mut s = TriageSession::default();
    s = session::submit_answer(s, keys::MAIN_SYMPTOM, "Tos o malestar respiratorio");
    s = session::submit_answer(s, keys::SYMPTOM_DURATION, "Hoy");

    // The intensity question never appears; the flow lands on fever.
    let question = session::current_question(&s).unwrap();
    assert_eq!(question.key, keys::FEVER);
}

#[test]
fn pain_question_is_presented_when_the_symptom_mentions_pain() {
    let mut s = TriageSession::default();
    s = session::submit_answer(s, keys::MAIN_SYMPTOM, "Dolor de cabeza");
    s = session::submit_answer(s, keys::SYMPTOM_DURATION, "Hoy");

    let question = session::current_question(&s).unwrap();
    assert_eq!(question.key, keys::PAIN_LEVEL);
    assert_eq!(question.prompt, "¿Qué tan intenso es el dolor de cabeza? (1-10)");
}

#[test]
fn duration_prompt_specializes_on_the_main_symptom() {
    let pain = answered(&[(keys::MAIN_SYMPTOM, "Dolor de garganta")]);
    assert_eq!(
        questions::next_question(&pain, 1).unwrap().prompt,
        "¿Desde cuándo sientes este dolor?"
    );

    let fever = answered(&[(keys::MAIN_SYMPTOM, "Fiebre o temperatura elevada")]);
    assert_eq!(
        questions::next_question(&fever, 1).unwrap().prompt,
        "¿Desde cuándo tienes fiebre?"
    );

    let generic = answered(&[(keys::MAIN_SYMPTOM, "Otro síntoma general")]);
    assert_eq!(
        questions::next_question(&generic, 1).unwrap().prompt,
        "¿Desde cuándo presentas estos síntomas?"
    );
}

#[test]
fn fever_question_asks_for_temperature_when_fever_is_the_symptom() {
    let answers = answered(&[(keys::MAIN_SYMPTOM, "Fiebre o temperatura elevada")]);
    let question = questions::next_question(&answers, 3).unwrap();

    assert_eq!(question.prompt, "¿Sabes qué temperatura tienes aproximadamente?");
    assert!(question.options.contains(&"Más de 39°C (Fiebre alta)"));

    let other = answered(&[(keys::MAIN_SYMPTOM, "Dolor de cabeza")]);
    let question = questions::next_question(&other, 3).unwrap();
    assert_eq!(question.options, vec!["Sí", "No", "No estoy seguro"]);
}

#[test]
fn additional_symptom_options_follow_the_main_symptom() {
    let chest = answered(&[(keys::MAIN_SYMPTOM, "Dolor de pecho")]);
    let question = questions::next_question(&chest, 4).unwrap();
    assert!(question.options.contains(&"Dolor en el brazo"));

    let cough = answered(&[(keys::MAIN_SYMPTOM, "Tos o malestar respiratorio")]);
    let question = questions::next_question(&cough, 4).unwrap();
    assert!(question.options.contains(&"Congestión nasal"));
}

#[test]
fn blank_answers_do_not_advance_the_flow() {
    let s = TriageSession::default();
    let s = session::submit_answer(s, keys::MAIN_SYMPTOM, "   ");

    assert!(s.answers.is_empty());
    assert_eq!(s.step, 0);
    assert_eq!(
        session::current_question(&s).unwrap().key,
        keys::MAIN_SYMPTOM
    );
}

#[test]
fn full_walk_reaches_terminal_and_restart_discards_everything() {
    let mut s = TriageSession::default();
    let answers = [
        (keys::MAIN_SYMPTOM, "Dolor de cabeza"),
        (keys::SYMPTOM_DURATION, "Hace 1-3 días"),
        (keys::PAIN_LEVEL, "4-6 (Moderado)"),
        (keys::FEVER, "No"),
        (keys::ADDITIONAL_SYMPTOMS, "Ninguno"),
        (keys::MEDICATION, "No he tomado nada"),
        (keys::EXISTING_CONDITIONS, "No, ninguna conocida"),
        (keys::ADDITIONAL_INFO, "Es leve, solo quiero una orientación"),
    ];

    for (key, value) in answers {
        assert!(!session::is_terminal(&s));
        let question = session::current_question(&s).unwrap();
        assert_eq!(question.key, key);
        s = session::submit_answer(s, key, value);
    }

    assert!(session::is_terminal(&s));
    assert_eq!(s.answers.len(), 8);

    let restarted = session::restart(s);
    assert!(restarted.answers.is_empty());
    assert_eq!(restarted.step, 0);
    assert!(!session::is_terminal(&restarted));
}

#[test]
fn skipping_shortens_the_walk_without_repeating_questions() {
    let mut s = TriageSession::default();
    let answers = [
        (keys::MAIN_SYMPTOM, "Fiebre o temperatura elevada"),
        (keys::SYMPTOM_DURATION, "Hoy"),
        (keys::FEVER, "38°C - 39°C (Fiebre moderada)"),
        (keys::ADDITIONAL_SYMPTOMS, "Ninguno"),
        (keys::MEDICATION, "Sí, y me ayudó"),
        (keys::EXISTING_CONDITIONS, "Diabetes"),
        (keys::ADDITIONAL_INFO, "No estoy seguro"),
    ];

    for (key, value) in answers {
        let question = session::current_question(&s).unwrap();
        assert_eq!(question.key, key);
        s = session::submit_answer(s, key, value);
    }

    assert!(session::is_terminal(&s));
    assert_eq!(s.answers.len(), 7);
    assert!(s.answers.get(keys::PAIN_LEVEL).is_none());
}

#[test]
fn contextual_responses_acknowledge_key_answers() {
    let chest = questions::contextual_response(keys::MAIN_SYMPTOM, "Dolor en el pecho").unwrap();
    assert!(chest.contains("evaluar cuidadosamente"));

    let breathing =
        questions::contextual_response(keys::ADDITIONAL_SYMPTOMS, "Dificultad para respirar")
            .unwrap();
    assert!(breathing.contains("dificultad para respirar") || breathing.contains("Dificultad"));

    assert!(questions::contextual_response(keys::ADDITIONAL_INFO, "No estoy seguro").is_none());
}
