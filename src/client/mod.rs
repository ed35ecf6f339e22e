mod wire;

use crate::error::ClientError;
use crate::model::{Question, SessionStats, Verdict};
use crate::session::{Call, Event, Ticket};
use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use wire::{AnswerRequest, ErrorBody, QuestionPayload};

const EXHAUSTED_FALLBACK: &str = "¡No quedan más preguntas!";

/// Contrato del servicio remoto de quiz. Cada llamada es de un solo intento.
pub trait QuizService: Send + Sync {
    fn start_session(&self) -> Result<(), ClientError>;
    fn fetch_question(&self) -> Result<Question, ClientError>;
    fn submit_answer(&self, answer: &str) -> Result<Verdict, ClientError>;
    fn fetch_stats(&self) -> Result<SessionStats, ClientError>;
}

impl Call {
    /// Ejecuta la llamada y la traduce al evento de éxito o fallo correspondiente.
    pub fn perform(self, service: &dyn QuizService, ticket: Ticket) -> Event {
        match self {
            Call::StartSession => match service.start_session() {
                Ok(()) => Event::Started(ticket),
                Err(err) => Event::StartFailed(ticket, err),
            },
            Call::FetchQuestion => match service.fetch_question() {
                Ok(q) => Event::QuestionReceived(ticket, q),
                Err(err) => Event::QuestionFailed(ticket, err),
            },
            Call::SubmitAnswer(answer) => match service.submit_answer(&answer) {
                Ok(verdict) => Event::Verified(ticket, verdict),
                Err(err) => Event::VerifyFailed(ticket, err),
            },
            Call::FetchStats => match service.fetch_stats() {
                Ok(stats) => Event::StatsReceived(ticket, stats),
                Err(err) => Event::StatsFailed(ticket, err),
            },
        }
    }
}

/// Cliente HTTP bloqueante; se usa siempre desde hilos de trabajo.
pub struct HttpQuizClient {
    base: String,
    http: Client,
}

impl HttpQuizClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base: endpoint.trim().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    fn get(&self, path: &str) -> Result<Response, ClientError> {
        let url = self.url(path);
        debug!("GET {url}");
        Ok(self.http.get(url).send()?)
    }
}

fn status_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().unwrap_or_default();
    ClientError::Status {
        status,
        body: body.trim().to_string(),
    }
}

fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(status_error(response));
    }
    let text = response.text()?;
    Ok(serde_json::from_str(&text)?)
}

impl QuizService for HttpQuizClient {
    fn start_session(&self) -> Result<(), ClientError> {
        let response = self.get("start_quiz")?;
        if !response.status().is_success() {
            return Err(status_error(response));
        }
        Ok(())
    }

    fn fetch_question(&self) -> Result<Question, ClientError> {
        let response = self.get("get_question")?;
        if response.status() == StatusCode::NOT_FOUND {
            let text = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| EXHAUSTED_FALLBACK.to_string());
            return Err(ClientError::Exhausted(message));
        }
        let payload: QuestionPayload = read_json(response)?;
        Question::try_from(payload)
    }

    fn submit_answer(&self, answer: &str) -> Result<Verdict, ClientError> {
        let url = self.url("submit_answer");
        debug!("POST {url}");
        let body = serde_json::to_string(&AnswerRequest { answer })?;
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        read_json(response)
    }

    fn fetch_stats(&self) -> Result<SessionStats, ClientError> {
        read_json(self.get("get_stats")?)
    }
}
