// libs/triage-cell/src/services/questions.rs
//
// The question flow as a declarative node table: prompt template, answer
// key, option set, and a skip predicate per node. A small interpreter walks
// the table; a node whose predicate fires is passed over without being
// presented, and the walk continues at the next index.

use crate::models::{keys, Answers, Question, QuestionKind};

/// Keywords in the main symptom that make the intensity question relevant.
const PAIN_INDICATORS: [&str; 6] = [
    "dolor", "molestia", "malestar", "ardor", "picazón", "comezón",
];

struct QuestionNode {
    id: u8,
    key: &'static str,
    kind: QuestionKind,
    prompt: fn(&Answers) -> String,
    options: fn(&Answers) -> Vec<&'static str>,
    skip: fn(&Answers) -> bool,
}

fn never_skip(_: &Answers) -> bool {
    false
}

fn main_symptom_prompt(_: &Answers) -> String {
    "Hola, soy tu asistente médico virtual. Selecciona tu principal síntoma o molestia:"
        .to_string()
}

fn main_symptom_options(_: &Answers) -> Vec<&'static str> {
    vec![
        "Dolor de cabeza",
        "Fiebre o temperatura elevada",
        "Tos o malestar respiratorio",
        "Dolor de garganta",
        "Dolor de estómago o abdominal",
        "Dolor en el pecho",
        "Malestar general / cuerpo cortado",
        "Otro síntoma general",
    ]
}

fn duration_prompt(answers: &Answers) -> String {
    let main = answers.lower(keys::MAIN_SYMPTOM);

    if main.contains("dolor") {
        "¿Desde cuándo sientes este dolor?".to_string()
    } else if main.contains("fiebre") || main.contains("temperatura") {
        "¿Desde cuándo tienes fiebre?".to_string()
    } else if main.contains("tos") {
        "¿Desde cuándo tienes tos?".to_string()
    } else if main.contains("nausea") || main.contains("náusea") || main.contains("vomito") {
        "¿Desde cuándo tienes estos síntomas digestivos?".to_string()
    } else {
        "¿Desde cuándo presentas estos síntomas?".to_string()
    }
}

fn duration_options(_: &Answers) -> Vec<&'static str> {
    vec![
        "Hoy",
        "Hace 1-3 días",
        "Hace 4-7 días",
        "Más de una semana",
        "Más de un mes",
    ]
}

fn pain_level_skip(answers: &Answers) -> bool {
    let main = answers.lower(keys::MAIN_SYMPTOM);
    !PAIN_INDICATORS.iter().any(|kw| main.contains(kw))
}

fn pain_level_prompt(answers: &Answers) -> String {
    let main = answers.lower(keys::MAIN_SYMPTOM);

    if main.contains("dolor de cabeza") || main.contains("cefalea") {
        "¿Qué tan intenso es el dolor de cabeza? (1-10)".to_string()
    } else if main.contains("dolor de pecho") {
        "¿Qué tan intenso es el dolor en el pecho? (1-10)".to_string()
    } else if main.contains("dolor de estómago") || main.contains("dolor abdominal") {
        "¿Qué tan intenso es el dolor abdominal? (1-10)".to_string()
    } else if main.contains("dolor de garganta") {
        "¿Qué tan intenso es el dolor de garganta? (1-10)".to_string()
    } else {
        "¿Qué tan intenso es el dolor o molestia? (1-10)".to_string()
    }
}

fn pain_level_options(_: &Answers) -> Vec<&'static str> {
    vec![
        "1-3 (Leve)",
        "4-6 (Moderado)",
        "7-8 (Fuerte)",
        "9-10 (Muy intenso)",
    ]
}

fn fever_prompt(answers: &Answers) -> String {
    let main = answers.lower(keys::MAIN_SYMPTOM);

    if main.contains("fiebre") || main.contains("temperatura") {
        "¿Sabes qué temperatura tienes aproximadamente?".to_string()
    } else {
        "¿Tienes fiebre o has sentido que tu temperatura está elevada?".to_string()
    }
}

fn fever_options(answers: &Answers) -> Vec<&'static str> {
    let main = answers.lower(keys::MAIN_SYMPTOM);

    if main.contains("fiebre") || main.contains("temperatura") {
        vec![
            "Menos de 37.5°C (Normal)",
            "37.5°C - 38°C (Fiebre leve)",
            "38°C - 39°C (Fiebre moderada)",
            "Más de 39°C (Fiebre alta)",
            "No lo sé",
        ]
    } else {
        vec!["Sí", "No", "No estoy seguro"]
    }
}

fn additional_symptoms_prompt(answers: &Answers) -> String {
    let main = answers.lower(keys::MAIN_SYMPTOM);

    if main.contains("dolor de cabeza") {
        "¿Tienes algún otro síntoma además del dolor de cabeza?".to_string()
    } else if main.contains("dolor de pecho") {
        "¿Tienes algún otro síntoma además del dolor en el pecho?".to_string()
    } else if main.contains("dolor de estómago") || main.contains("dolor abdominal") {
        "¿Tienes algún otro síntoma digestivo?".to_string()
    } else if main.contains("tos") {
        "¿Tienes algún otro síntoma respiratorio?".to_string()
    } else {
        "¿Tienes algún otro síntoma adicional?".to_string()
    }
}

fn additional_symptoms_options(answers: &Answers) -> Vec<&'static str> {
    let main = answers.lower(keys::MAIN_SYMPTOM);

    if main.contains("dolor de cabeza") {
        vec![
            "Ninguno",
            "Náuseas",
            "Sensibilidad a la luz",
            "Fiebre",
            "Visión borrosa",
            "Otro",
        ]
    } else if main.contains("dolor de pecho") {
        vec![
            "Ninguno",
            "Dificultad para respirar",
            "Sudoración",
            "Náuseas",
            "Dolor en el brazo",
            "Otro",
        ]
    } else if main.contains("dolor de estómago") || main.contains("dolor abdominal") {
        vec![
            "Ninguno",
            "Náuseas",
            "Vómitos",
            "Diarrea",
            "Estreñimiento",
            "Otro",
        ]
    } else if main.contains("tos") {
        vec![
            "Ninguno",
            "Congestión nasal",
            "Dolor de garganta",
            "Fiebre",
            "Dificultad para respirar",
            "Otro",
        ]
    } else {
        vec![
            "Ninguno",
            "Náuseas o vómitos",
            "Dolor de cabeza",
            "Fatiga o cansancio",
            "Dificultad para respirar",
            "Otro",
        ]
    }
}

fn medication_prompt(_: &Answers) -> String {
    "¿Has tomado algún medicamento para aliviar estos síntomas?".to_string()
}

fn medication_options(_: &Answers) -> Vec<&'static str> {
    vec![
        "Sí, y me ayudó",
        "Sí, pero no me ayudó mucho",
        "No he tomado nada",
    ]
}

fn existing_conditions_prompt(_: &Answers) -> String {
    "¿Tienes alguna condición médica preexistente o alergias importantes?".to_string()
}

fn existing_conditions_options(_: &Answers) -> Vec<&'static str> {
    vec![
        "No, ninguna conocida",
        "Hipertensión / problemas del corazón",
        "Diabetes",
        "Asma u otros problemas respiratorios",
        "Alergia a medicamentos (por ejemplo, penicilina)",
        "Embarazo o sospecha de embarazo",
        "Otra condición importante",
    ]
}

fn additional_info_prompt(_: &Answers) -> String {
    "¿Qué tan urgente sientes tu situación?".to_string()
}

fn additional_info_options(_: &Answers) -> Vec<&'static str> {
    vec![
        "Es leve, solo quiero una orientación",
        "Me preocupa, pero puedo esperar unas horas",
        "Siento que es urgente",
        "No estoy seguro",
    ]
}

const NODES: [QuestionNode; 8] = [
    QuestionNode {
        id: 1,
        key: keys::MAIN_SYMPTOM,
        kind: QuestionKind::Select,
        prompt: main_symptom_prompt,
        options: main_symptom_options,
        skip: never_skip,
    },
    QuestionNode {
        id: 2,
        key: keys::SYMPTOM_DURATION,
        kind: QuestionKind::Select,
        prompt: duration_prompt,
        options: duration_options,
        skip: never_skip,
    },
    QuestionNode {
        id: 3,
        key: keys::PAIN_LEVEL,
        kind: QuestionKind::Select,
        prompt: pain_level_prompt,
        options: pain_level_options,
        skip: pain_level_skip,
    },
    QuestionNode {
        id: 4,
        key: keys::FEVER,
        kind: QuestionKind::Select,
        prompt: fever_prompt,
        options: fever_options,
        skip: never_skip,
    },
    QuestionNode {
        id: 5,
        key: keys::ADDITIONAL_SYMPTOMS,
        kind: QuestionKind::Select,
        prompt: additional_symptoms_prompt,
        options: additional_symptoms_options,
        skip: never_skip,
    },
    QuestionNode {
        id: 6,
        key: keys::MEDICATION,
        kind: QuestionKind::Select,
        prompt: medication_prompt,
        options: medication_options,
        skip: never_skip,
    },
    QuestionNode {
        id: 7,
        key: keys::EXISTING_CONDITIONS,
        kind: QuestionKind::Select,
        prompt: existing_conditions_prompt,
        options: existing_conditions_options,
        skip: never_skip,
    },
    QuestionNode {
        id: 8,
        key: keys::ADDITIONAL_INFO,
        kind: QuestionKind::Select,
        prompt: additional_info_prompt,
        options: additional_info_options,
        skip: never_skip,
    },
];

/// Index of the first non-skipped node at or after `index`, if any.
pub(crate) fn resolve_index(answers: &Answers, index: usize) -> Option<usize> {
    (index..NODES.len()).find(|&idx| !(NODES[idx].skip)(answers))
}

/// The next question to present given the accumulated answers, or None when
/// the flow is terminal.
pub fn next_question(answers: &Answers, index: usize) -> Option<Question> {
    let idx = resolve_index(answers, index)?;
    let node = &NODES[idx];
    Some(Question {
        id: node.id,
        key: node.key,
        prompt: (node.prompt)(answers),
        kind: node.kind,
        options: (node.options)(answers),
    })
}

/// Optional acknowledgement surfaced between a submitted answer and the
/// next question.
pub fn contextual_response(key: &str, answer: &str) -> Option<String> {
    let answer_lower = answer.to_lowercase();

    if key == keys::MAIN_SYMPTOM {
        let text = if answer_lower.contains("dolor de pecho") || answer_lower.contains("dolor en el pecho") {
            "El dolor en el pecho es un síntoma que debemos evaluar cuidadosamente. Voy a hacerte algunas preguntas importantes."
        } else if answer_lower.contains("dolor de cabeza") {
            "Entiendo que tienes dolor de cabeza. Hay diferentes tipos y causas, así que necesito más información."
        } else if answer_lower.contains("fiebre") {
            "La fiebre puede indicar una infección. Es importante evaluar su intensidad y duración."
        } else if answer_lower.contains("tos") {
            "La tos puede tener varias causas. Vamos a evaluar si es seca o con flemas, y otros síntomas asociados."
        } else if answer_lower.contains("dolor de estómago") || answer_lower.contains("dolor abdominal") {
            "El dolor abdominal puede tener diferentes causas. Necesito más detalles para ayudarte mejor."
        } else if answer_lower.contains("dolor de garganta") {
            "El dolor de garganta es común y puede ser causado por varias razones. Continuemos evaluando."
        } else {
            "Gracias por compartir eso. Voy a hacerte algunas preguntas para entender mejor tu situación."
        };
        return Some(text.to_string());
    }

    if key == keys::SYMPTOM_DURATION {
        let text = if answer.contains("Más de un mes") {
            "Llevas más de un mes con estos síntomas. Es importante que consultes con un especialista pronto para una evaluación adecuada."
        } else if answer.contains("Más de una semana") {
            "Una semana es un tiempo considerable. Vamos a evaluar la gravedad para determinar la mejor atención."
        } else if answer.contains("Hace 4-7 días") {
            "Varios días con síntomas. Continuemos evaluando para darte la mejor recomendación."
        } else {
            "Es relativamente reciente. Continuemos con la evaluación."
        };
        return Some(text.to_string());
    }

    if key == keys::PAIN_LEVEL {
        let text = if answer.contains("9-10") || answer.contains("7-8") {
            "El dolor es bastante intenso. Esto requiere atención médica profesional. Te daré recomendaciones específicas al final."
        } else if answer.contains("4-6") {
            "El dolor moderado puede ser manejable, pero aún así es importante que un profesional lo evalúe adecuadamente."
        } else {
            "Bien, parece que el malestar es leve. Aún así, es importante evaluarlo para descartar cualquier problema."
        };
        return Some(text.to_string());
    }

    if key == keys::FEVER {
        let text = if answer.contains("Más de 39°C") || answer.contains("Fiebre alta") {
            "Una fiebre alta requiere atención médica. Te recomendaré agendar una cita de inmediato."
        } else if answer == "Sí" || answer.contains("Fiebre") {
            "La fiebre es un síntoma importante. Continuemos evaluando para determinar la mejor atención."
        } else {
            "Bien, no hay fiebre. Eso es una buena señal, pero continuemos evaluando tus otros síntomas."
        };
        return Some(text.to_string());
    }

    if key == keys::ADDITIONAL_SYMPTOMS {
        let text = if answer.contains("Dificultad para respirar") {
            "La dificultad para respirar es un síntoma importante que requiere atención médica. Lo tendré en cuenta en mis recomendaciones."
        } else if answer != "Ninguno" {
            "Entiendo. Estos síntomas adicionales son importantes para una evaluación completa."
        } else {
            "Bien, no hay síntomas adicionales. Continuemos."
        };
        return Some(text.to_string());
    }

    if key == keys::MEDICATION {
        let text = if answer.contains("me ayudó") && !answer.contains("no me ayudó") {
            "Bien que el medicamento te haya ayudado. Aún así, es importante que un médico evalúe tu caso para un tratamiento adecuado."
        } else if answer.contains("no me ayudó") {
            "Si el medicamento no te ayudó, es importante consultar con un médico para un tratamiento más efectivo."
        } else {
            "Es importante no automedicarse sin supervisión médica. Continuemos con la evaluación."
        };
        return Some(text.to_string());
    }

    None
}
