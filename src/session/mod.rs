use crate::error::ClientError;
use crate::model::{FinishReason, Question, Screen, SessionStats, Verdict};
use std::time::Duration;

mod transitions;

pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Identifica una petición remota o un temporizador emitido por la sesión.
/// Las respuestas con un ticket que ya no se espera se descartan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[cfg(test)]
impl Ticket {
    pub(crate) fn raw(n: u64) -> Self {
        Ticket(n)
    }
}

/// Las cuatro llamadas al servicio de quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    StartSession,
    FetchQuestion,
    SubmitAnswer(String),
    FetchStats,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    // Usuario
    StartRequested(usize),
    AnswerSubmitted(String),
    EndRequested,
    PlayAgainRequested,
    // Servicio remoto
    Started(Ticket),
    StartFailed(Ticket, ClientError),
    QuestionReceived(Ticket, Question),
    QuestionFailed(Ticket, ClientError),
    Verified(Ticket, Verdict),
    VerifyFailed(Ticket, ClientError),
    StatsReceived(Ticket, SessionStats),
    StatsFailed(Ticket, ClientError),
    // Temporizador
    AdvanceDue(Ticket),
}

/// Lo que la sesión pide al exterior tras aplicar un evento.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Request { ticket: Ticket, call: Call },
    ScheduleAdvance { ticket: Ticket, delay: Duration },
    CancelAdvance(Ticket),
}

/// Estado completo de una partida. Solo `apply` lo modifica.
#[derive(Debug, Clone)]
pub struct Session {
    screen: Screen,
    configured_count: usize,
    current_index: usize,
    score: usize,
    question: Option<Question>,
    submission: Option<String>,
    verdict: Option<Verdict>,
    stats: Option<SessionStats>,
    message: String,
    finish: Option<FinishReason>,
    advance_delay: Duration,
    awaiting: Option<Ticket>,
    /// Corrección en curso; sobrevive a "terminar quiz" para no perder el punto.
    verifying: Option<Ticket>,
    advance: Option<Ticket>,
    last_ticket: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE_DELAY)
    }
}

impl Session {
    pub fn new(advance_delay: Duration) -> Self {
        Self {
            screen: Screen::Configuring,
            configured_count: 0,
            current_index: 0,
            score: 0,
            question: None,
            submission: None,
            verdict: None,
            stats: None,
            message: String::new(),
            finish: None,
            advance_delay,
            awaiting: None,
            verifying: None,
            advance: None,
            last_ticket: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }
    pub fn configured_count(&self) -> usize {
        self.configured_count
    }
    pub fn current_index(&self) -> usize {
        self.current_index
    }
    pub fn score(&self) -> usize {
        self.score
    }
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }
    pub fn submission(&self) -> Option<&str> {
        self.submission.as_deref()
    }
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }
    pub fn stats(&self) -> Option<&SessionStats> {
        self.stats.as_ref()
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn finish(&self) -> Option<FinishReason> {
        self.finish
    }
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    /// Hay un avance automático programado.
    pub fn is_advance_armed(&self) -> bool {
        self.advance.is_some()
    }

    /// Hay una respuesta ya enviada esperando veredicto.
    pub fn is_verifying(&self) -> bool {
        self.submission.is_some() && self.verdict.is_none()
    }

    /// Progreso de la barra superior (0.0..=1.0).
    pub fn progress_fraction(&self) -> f32 {
        if self.configured_count == 0 {
            return 0.0;
        }
        (self.current_index as f32 / self.configured_count as f32).min(1.0)
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.last_ticket += 1;
        Ticket(self.last_ticket)
    }
}
