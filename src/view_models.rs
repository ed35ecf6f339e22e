// src/view_models.rs

use crate::model::{FinishReason, SessionStats, TopicStat};

const NO_TOPICS: &str = "No hay temas intentados.";

#[derive(Clone, Debug, PartialEq)]
pub struct StatsRow {
    pub topic: String,
    pub correct: u32,
    pub attempted: u32,
    pub score: String, // "75 %"
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatsBody {
    Rows(Vec<StatsRow>),
    Empty(String),
}

/// Proyección de solo lectura del resumen final.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsView {
    pub title: String,
    pub difficulty_line: String,
    pub body: StatsBody,
}

/// Redondeo entero "lejos de cero", como se muestra el porcentaje.
pub fn format_percent(score: f64) -> String {
    format!("{} %", score.round() as i64)
}

impl From<&TopicStat> for StatsRow {
    fn from(stat: &TopicStat) -> Self {
        Self {
            topic: stat.topic.clone(),
            correct: stat.correct,
            attempted: stat.attempted,
            score: format_percent(stat.score),
        }
    }
}

impl From<&SessionStats> for StatsView {
    fn from(stats: &SessionStats) -> Self {
        let body = if stats.topics.is_empty() {
            StatsBody::Empty(
                stats
                    .message
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| NO_TOPICS.to_string()),
            )
        } else {
            StatsBody::Rows(stats.topics.iter().map(StatsRow::from).collect())
        };

        Self {
            title: format!("Estadísticas finales de {}", stats.username),
            difficulty_line: format!("Nivel de dificultad global: {}", stats.overall_difficulty),
            body,
        }
    }
}

pub fn final_score_line(score: usize, configured: usize) -> String {
    format!("Tu puntuación final: {score} / {configured}")
}

pub fn finish_note(reason: Option<FinishReason>) -> Option<&'static str> {
    match reason? {
        FinishReason::Completed => None,
        FinishReason::EndedEarly => Some("Quiz terminado antes de tiempo."),
        FinishReason::Exhausted => Some("El servidor no tenía más preguntas."),
        FinishReason::QuestionUnavailable => {
            Some("No se pudo cargar la siguiente pregunta; se muestran las estadísticas hasta aquí.")
        }
    }
}
