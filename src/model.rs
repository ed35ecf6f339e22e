use serde::{Deserialize, Serialize};

/// Variante de pregunta tal como la emite el servicio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    /// Opciones en orden; cada una trae su prefijo ("A) ...", "B. ...").
    MultipleChoice { options: Vec<String> },
    TrueFalse,
    FillInBlank,
}

impl QuestionKind {
    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "MC",
            QuestionKind::TrueFalse => "TF",
            QuestionKind::FillInBlank => "FIB",
        }
    }

    /// ¿Es `answer` un candidato válido para esta variante?
    pub fn accepts(&self, answer: &str) -> bool {
        match self {
            QuestionKind::MultipleChoice { options } => {
                let mut chars = answer.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => {
                        (0..options.len()).any(|i| option_letter(i) == letter)
                    }
                    _ => false,
                }
            }
            QuestionKind::TrueFalse => answer == TRUE_ANSWER || answer == FALSE_ANSWER,
            QuestionKind::FillInBlank => !answer.trim().is_empty(),
        }
    }
}

pub const TRUE_ANSWER: &str = "true";
pub const FALSE_ANSWER: &str = "false";

/// Letra posicional de una opción: A, B, C, …
pub fn option_letter(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| char::from_u32('A' as u32 + i))
        .unwrap_or('?')
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub topic: String,
    pub difficulty: u8, // 1 (fácil) .. 3 (difícil)
    pub text: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn difficulty_label(&self) -> &'static str {
        match self.difficulty {
            1 => "Fácil",
            2 => "Media",
            3 => "Difícil",
            _ => "¿?",
        }
    }
}

/// Veredicto del servicio para la pregunta en curso.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
    #[serde(rename = "correctAnswerString")]
    pub correct_answer: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicStat {
    pub topic: String,
    pub correct: u32,
    pub attempted: u32,
    pub score: f64, // porcentaje 0..100
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub username: String,
    #[serde(rename = "overallDifficulty")]
    pub overall_difficulty: u8,
    #[serde(default)]
    pub topics: Vec<TopicStat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Qué llamada remota está pendiente mientras se muestra la pantalla de carga.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loading {
    Start,
    Question,
    Stats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Configuring,
    Loading(Loading),
    Active,
    Results,
}

/// Por qué terminó la ronda (se muestra en el resumen).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishReason {
    Completed,
    EndedEarly,
    Exhausted,
    QuestionUnavailable,
}
