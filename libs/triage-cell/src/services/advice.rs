// libs/triage-cell/src/services/advice.rs
//
// Canned recommendation text per severity plus the three medication-advice
// tiers per symptom category. Advisory wording only, never a prescription.

use crate::models::{keys, Answers, Diagnosis, Severity};
use crate::services::scoring;

const RECOMMENDATION_URGENT: &str = "Basado en la intensidad y duración de tus síntomas, te recomiendo agendar una cita de inmediato. Tu caso requiere atención médica profesional lo antes posible.";
const RECOMMENDATION_MODERATE: &str = "Tus síntomas requieren atención médica profesional. Te recomiendo agendar una cita en los próximos días para una evaluación adecuada.";
const RECOMMENDATION_MILD: &str = "Aunque tus síntomas parecen leves, es importante que un profesional médico los evalúe para descartar cualquier condición subyacente y recibir el tratamiento adecuado.";

const DISCLAIMER: &str = "Nota importante: esta es una evaluación preliminar. Las recomendaciones de medicamentos son solo de referencia general y pueden no ser adecuadas para todos los pacientes. No reemplaza una consulta médica profesional. Si tus síntomas empeoran o tienes dudas, busca atención médica inmediata.";

const HEADACHE_ADVICE: [&str; 3] = [
    "Para dolores de cabeza leves, suelen utilizarse analgésicos de venta libre como paracetamol, siempre y cuando no tengas alergias ni contraindicaciones.",
    "Para dolor de cabeza moderado, pueden utilizarse analgésicos como paracetamol o ibuprofeno, pero es importante no exceder las dosis recomendadas y consultar a un profesional.",
    "Dado que el dolor de cabeza es intenso, evita automedicarte en exceso y busca valoración médica; el analgésico solo debería ser una medida temporal.",
];

const FEVER_ADVICE: [&str; 3] = [
    "Para fiebre leve se usan con frecuencia medicamentos como paracetamol. Mantén buena hidratación y monitorea la temperatura.",
    "Si la fiebre es moderada, se pueden usar antipiréticos como paracetamol; si persiste más de 48 horas, es recomendable acudir al médico.",
    "Con fiebre alta o persistente, la automedicación sólo debe ser temporal y bajo vigilancia; se recomienda valoración médica urgente.",
];

const GENERAL_PAIN_ADVICE: [&str; 3] = [
    "Para malestares generales leves muchas personas usan analgésicos simples (por ejemplo, paracetamol) y reposo.",
    "Para dolor moderado pueden usarse analgésicos como paracetamol o antiinflamatorios, siempre respetando dosis y antecedentes médicos.",
    "Cuando el dolor es intenso, la prioridad es la valoración médica; evita aumentar la dosis por tu cuenta y busca ayuda profesional.",
];

fn recommendation(severity: Severity) -> &'static str {
    match severity {
        Severity::Urgent => RECOMMENDATION_URGENT,
        Severity::Moderate => RECOMMENDATION_MODERATE,
        Severity::Mild => RECOMMENDATION_MILD,
    }
}

fn tier(table: &[&'static str; 3], index: usize) -> &'static str {
    table[index]
}

/// The medication-advice line, if any applies. Category precedence is
/// headache, then fever, then general pain.
pub fn medication_advice(answers: &Answers, severity: Severity) -> Option<&'static str> {
    let main = answers.lower(keys::MAIN_SYMPTOM);
    let fever = answers.get(keys::FEVER).unwrap_or_default();
    let pain = answers.get(keys::PAIN_LEVEL).unwrap_or_default();

    let pain_is_severe = pain.contains("9-10") || pain.contains("7-8");
    let pain_is_moderate = pain.contains("4-6");
    let pain_tier = if pain_is_severe {
        2
    } else if pain_is_moderate {
        1
    } else {
        0
    };

    if main.contains("cabeza") {
        return Some(tier(&HEADACHE_ADVICE, pain_tier));
    }

    if main.contains("fiebre") || fever.contains("Fiebre") || fever == "Sí" {
        let fever_tier = match severity {
            Severity::Urgent => 2,
            Severity::Moderate => 1,
            Severity::Mild => 0,
        };
        return Some(tier(&FEVER_ADVICE, fever_tier));
    }

    if main.contains("dolor") || main.contains("malestar") {
        return Some(tier(&GENERAL_PAIN_ADVICE, pain_tier));
    }

    None
}

/// Pure function of the accumulated answers: replaying the same answers
/// always yields the same specialty, severity, and advice text.
pub fn diagnose(answers: &Answers) -> Diagnosis {
    let specialty = scoring::recommend_specialty(answers);
    let severity = scoring::severity(answers);

    let mut advice = String::new();
    advice.push_str(recommendation(severity));
    advice.push_str(&format!(
        "\n\nBasado en el análisis de tus síntomas, te recomiendo agendar una cita con {}.",
        specialty
    ));

    if let Some(meds) = medication_advice(answers, severity) {
        advice.push_str("\n\n");
        advice.push_str(meds);
    }

    let fever = answers.get(keys::FEVER).unwrap_or_default();
    if fever == "Sí" || fever.contains("Fiebre") {
        advice.push_str("\n\nMientras tanto, mantente hidratado y descansa. Si la fiebre supera los 38.5°C, considera atención inmediata.");
    }

    let pain = answers.get(keys::PAIN_LEVEL).unwrap_or_default();
    let combined = scoring::combined_text(answers);
    if combined.contains("pecho") && (pain.contains("7-8") || pain.contains("9-10")) {
        advice.push_str("\n\nEl dolor en el pecho de alta intensidad requiere evaluación médica urgente. Si el dolor empeora o se extiende al brazo, busca atención de emergencia inmediatamente.");
    }

    advice.push_str("\n\n");
    advice.push_str(DISCLAIMER);

    Diagnosis {
        specialty: specialty.to_string(),
        severity,
        advice_text: advice,
    }
}
