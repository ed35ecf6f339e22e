// src/data.rs

use serde::Deserialize;
use std::time::Duration;

const ENDPOINT_ENV: &str = "ADAPTIVE_QUIZ_ENDPOINT";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuizConfig {
    pub endpoint: String,
    pub question_presets: Vec<usize>,
    pub default_question_count: usize,
    pub advance_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:18080".to_string(),
            question_presets: vec![5, 10, 20],
            default_question_count: 10,
            advance_delay_ms: 1500,
            request_timeout_secs: 10,
        }
    }
}

impl QuizConfig {
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Número de preguntas preseleccionado; cae al primer preset si el valor
    /// por defecto no está en la lista.
    pub fn initial_question_count(&self) -> usize {
        if self.question_presets.contains(&self.default_question_count) {
            self.default_question_count
        } else {
            self.question_presets.first().copied().unwrap_or(self.default_question_count)
        }
    }

    /// Sustituye el endpoint si se pasa un valor no vacío.
    pub fn with_endpoint_override(mut self, value: Option<String>) -> Self {
        if let Some(endpoint) = value.filter(|s| !s.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        self
    }
}

pub fn parse_config(yaml: &str) -> Result<QuizConfig, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Carga la configuración embebida y aplica `ADAPTIVE_QUIZ_ENDPOINT`.
pub fn load_config() -> Result<QuizConfig, serde_yaml::Error> {
    let file_content = include_str!("data/quiz_config.yaml");
    let config = parse_config(file_content)?;
    Ok(config.with_endpoint_override(std::env::var(ENDPOINT_ENV).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let parsed = parse_config(include_str!("data/quiz_config.yaml")).unwrap();
        assert_eq!(parsed, QuizConfig::default());
        assert_eq!(parsed.advance_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = QuizConfig::default().with_endpoint_override(Some("  ".into()));
        assert_eq!(config.endpoint, "http://localhost:18080");
        let config = config.with_endpoint_override(Some("http://10.0.0.2:9000".into()));
        assert_eq!(config.endpoint, "http://10.0.0.2:9000");
    }

    #[test]
    fn unknown_default_falls_back_to_first_preset() {
        let config = QuizConfig {
            default_question_count: 7,
            ..QuizConfig::default()
        };
        assert_eq!(config.initial_question_count(), 5);
    }
}
