//! Presentación de respuestas por tipo de pregunta.
//!
//! Cada variante (MC, TF, FIB) tiene su propio renderer; `render` elige uno
//! con un `match` exhaustivo sobre [`QuestionKind`]. Todo es puro: la vista
//! depende solo de la pregunta, la respuesta enviada y el veredicto.

use crate::model::{FALSE_ANSWER, Question, QuestionKind, TRUE_ANSWER, Verdict, option_letter};

/// Clasificación visual de un candidato tras el veredicto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Neutral,
    Correct,
    IncorrectSelected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceView {
    /// Valor que se envía al servidor ("B", "true", …).
    pub answer: String,
    /// Texto del botón.
    pub label: String,
    pub mark: Mark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputView {
    Choices(Vec<ChoiceView>),
    FreeText { mark: Mark },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerView {
    pub input: InputView,
    /// Falso mientras se corrige la respuesta enviada y tras el veredicto.
    pub enabled: bool,
    pub feedback: Option<Feedback>,
}

pub trait AnswerRenderer {
    fn render(&self, question: &Question, submission: Option<&str>, verdict: Option<&Verdict>)
        -> AnswerView;
}

pub struct MultipleChoiceRenderer;
pub struct TrueFalseRenderer;
pub struct FillInBlankRenderer;

pub fn renderer_for(kind: &QuestionKind) -> &'static dyn AnswerRenderer {
    match kind {
        QuestionKind::MultipleChoice { .. } => &MultipleChoiceRenderer,
        QuestionKind::TrueFalse => &TrueFalseRenderer,
        QuestionKind::FillInBlank => &FillInBlankRenderer,
    }
}

pub fn render(question: &Question, submission: Option<&str>, verdict: Option<&Verdict>) -> AnswerView {
    renderer_for(&question.kind).render(question, submission, verdict)
}

/// Quita el prefijo de etiqueta ("A) ", "B. ") de una opción.
pub fn strip_option_label(option: &str) -> &str {
    option.split_once(' ').map(|(_, rest)| rest).unwrap_or(option)
}

/// El input de texto libre solo puede enviarse con contenido y sin respuesta en curso.
pub fn can_submit_text(draft: &str, submission: Option<&str>, verdict: Option<&Verdict>) -> bool {
    accepts_input(submission, verdict) && !draft.trim().is_empty()
}

fn accepts_input(submission: Option<&str>, verdict: Option<&Verdict>) -> bool {
    submission.is_none() && verdict.is_none()
}

fn classify(candidate: &str, correct: &str, submission: Option<&str>, verdict: Option<&Verdict>) -> Mark {
    if verdict.is_none() {
        Mark::Neutral
    } else if candidate == correct {
        Mark::Correct
    } else if submission == Some(candidate) {
        Mark::IncorrectSelected
    } else {
        Mark::Neutral
    }
}

fn feedback(verdict: Option<&Verdict>, disclose_answer: bool) -> Option<Feedback> {
    verdict.map(|v| {
        let text = if v.is_correct {
            "✅ ¡Correcto!".to_string()
        } else if disclose_answer {
            format!("❌ Incorrecto. La respuesta era: {}", v.correct_answer)
        } else {
            "❌ Incorrecto.".to_string()
        };
        Feedback {
            correct: v.is_correct,
            text,
        }
    })
}

impl AnswerRenderer for MultipleChoiceRenderer {
    fn render(&self, question: &Question, submission: Option<&str>, verdict: Option<&Verdict>) -> AnswerView {
        let options: &[String] = match &question.kind {
            QuestionKind::MultipleChoice { options } => options,
            _ => &[],
        };
        // La letra correcta es el primer carácter de la respuesta canónica.
        let correct_letter = verdict
            .and_then(|v| v.correct_answer.chars().next())
            .map(String::from)
            .unwrap_or_default();

        let choices = options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let letter = option_letter(i).to_string();
                ChoiceView {
                    label: format!("{letter}. {}", strip_option_label(option)),
                    mark: classify(&letter, &correct_letter, submission, verdict),
                    answer: letter,
                }
            })
            .collect();

        AnswerView {
            input: InputView::Choices(choices),
            enabled: accepts_input(submission, verdict),
            feedback: feedback(verdict, false),
        }
    }
}

impl AnswerRenderer for TrueFalseRenderer {
    fn render(&self, _question: &Question, submission: Option<&str>, verdict: Option<&Verdict>) -> AnswerView {
        let correct = verdict.map(|v| v.correct_answer.as_str()).unwrap_or_default();
        let choices = [(TRUE_ANSWER, "Verdadero"), (FALSE_ANSWER, "Falso")]
            .into_iter()
            .map(|(answer, label)| ChoiceView {
                answer: answer.to_string(),
                label: label.to_string(),
                mark: classify(answer, correct, submission, verdict),
            })
            .collect();

        AnswerView {
            input: InputView::Choices(choices),
            enabled: accepts_input(submission, verdict),
            feedback: feedback(verdict, false),
        }
    }
}

impl AnswerRenderer for FillInBlankRenderer {
    fn render(&self, _question: &Question, submission: Option<&str>, verdict: Option<&Verdict>) -> AnswerView {
        let mark = match verdict {
            None => Mark::Neutral,
            Some(v) if v.is_correct => Mark::Correct,
            Some(_) => Mark::IncorrectSelected,
        };
        AnswerView {
            input: InputView::FreeText { mark },
            enabled: accepts_input(submission, verdict),
            // Solo aquí se revela la respuesta canónica.
            feedback: feedback(verdict, true),
        }
    }
}
