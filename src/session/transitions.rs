use super::*;
use crate::model::Loading;
use log::{debug, info, warn};

const MSG_STARTING: &str = "Iniciando un nuevo quiz...";
const MSG_CONNECT_FAILED: &str = "No se pudo conectar con el servidor del quiz. ¿Está en marcha?";
const MSG_SUBMIT_FAILED: &str = "No se pudo enviar la respuesta.";
const MSG_STATS_FAILED: &str = "No se pudieron obtener las estadísticas.";

impl Session {
    /// Función de transición: aplica un evento y devuelve los efectos a ejecutar.
    /// Los eventos que no encajan con el estado actual no cambian nada.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::StartRequested(count) => self.start_requested(count),
            Event::Started(ticket) => self.started(ticket),
            Event::StartFailed(ticket, err) => self.start_failed(ticket, err),
            Event::QuestionReceived(ticket, q) => self.question_received(ticket, q),
            Event::QuestionFailed(ticket, err) => self.question_failed(ticket, err),
            Event::AnswerSubmitted(answer) => self.answer_submitted(answer),
            Event::Verified(ticket, verdict) => self.verified(ticket, verdict),
            Event::VerifyFailed(ticket, err) => self.verify_failed(ticket, err),
            Event::AdvanceDue(ticket) => self.advance_due(ticket),
            Event::EndRequested => self.end_requested(),
            Event::StatsReceived(ticket, stats) => self.stats_received(ticket, stats),
            Event::StatsFailed(ticket, err) => self.stats_failed(ticket, err),
            Event::PlayAgainRequested => self.play_again_requested(),
        }
    }

    fn start_requested(&mut self, count: usize) -> Vec<Effect> {
        if self.screen != Screen::Configuring {
            debug!("start ignorado en {:?}", self.screen);
            return Vec::new();
        }
        if count == 0 {
            self.message = "Elige al menos una pregunta.".into();
            return Vec::new();
        }

        info!("nuevo quiz de {count} preguntas");
        self.configured_count = count;
        self.reset_run();
        self.message = MSG_STARTING.into();
        self.screen = Screen::Loading(Loading::Start);
        vec![self.request(Call::StartSession)]
    }

    fn started(&mut self, ticket: Ticket) -> Vec<Effect> {
        if !self.claim(Loading::Start, ticket) {
            return Vec::new();
        }
        self.message.clear();
        self.screen = Screen::Loading(Loading::Question);
        vec![self.request(Call::FetchQuestion)]
    }

    fn start_failed(&mut self, ticket: Ticket, err: ClientError) -> Vec<Effect> {
        if !self.claim(Loading::Start, ticket) {
            return Vec::new();
        }
        warn!("start_quiz falló: {err}");
        self.reset_run();
        self.message = MSG_CONNECT_FAILED.into();
        self.screen = Screen::Configuring;
        Vec::new()
    }

    fn question_received(&mut self, ticket: Ticket, question: Question) -> Vec<Effect> {
        if !self.claim(Loading::Question, ticket) {
            return Vec::new();
        }
        self.current_index += 1;
        debug!(
            "pregunta {}/{} ({} · {})",
            self.current_index,
            self.configured_count,
            question.kind.tag(),
            question.topic
        );
        self.question = Some(question);
        self.submission = None;
        self.verdict = None;
        self.message.clear();
        self.screen = Screen::Active;
        Vec::new()
    }

    fn question_failed(&mut self, ticket: Ticket, err: ClientError) -> Vec<Effect> {
        if !self.claim(Loading::Question, ticket) {
            return Vec::new();
        }
        // Agotamiento y fallo de red terminan igual (se piden las estadísticas),
        // pero quedan registrados como motivos distintos.
        if err.is_exhaustion() {
            info!("el servidor no tiene más preguntas: {err}");
            self.finish = Some(FinishReason::Exhausted);
            self.message = err.to_string();
        } else {
            warn!("get_question falló: {err}");
            self.finish = Some(FinishReason::QuestionUnavailable);
            self.message = format!("No se pudo cargar la pregunta. {err}");
        }
        self.go_to_stats()
    }

    fn answer_submitted(&mut self, answer: String) -> Vec<Effect> {
        if self.screen != Screen::Active {
            debug!("respuesta ignorada en {:?}", self.screen);
            return Vec::new();
        }
        if self.submission.is_some() || self.verdict.is_some() {
            debug!("respuesta duplicada ignorada");
            return Vec::new();
        }
        let Some(question) = &self.question else {
            return Vec::new();
        };
        if !question.kind.accepts(&answer) {
            debug!("respuesta no válida para {}: {answer:?}", question.kind.tag());
            return Vec::new();
        }

        self.submission = Some(answer.clone());
        self.message.clear();
        let ticket = self.issue_ticket();
        self.verifying = Some(ticket);
        vec![Effect::Request {
            ticket,
            call: Call::SubmitAnswer(answer),
        }]
    }

    fn verified(&mut self, ticket: Ticket, verdict: Verdict) -> Vec<Effect> {
        if !self.take_verifying(ticket) {
            return Vec::new();
        }
        if verdict.is_correct {
            self.score += 1;
        }
        debug!(
            "veredicto {}: correcta={} ({}/{})",
            self.current_index, verdict.is_correct, self.score, self.current_index
        );
        if self.stats_on_hold() {
            return vec![self.request(Call::FetchStats)];
        }
        self.verdict = Some(verdict);

        let ticket = self.issue_ticket();
        self.advance = Some(ticket);
        vec![Effect::ScheduleAdvance {
            ticket,
            delay: self.advance_delay,
        }]
    }

    fn verify_failed(&mut self, ticket: Ticket, err: ClientError) -> Vec<Effect> {
        if !self.take_verifying(ticket) {
            return Vec::new();
        }
        warn!("submit_answer falló: {err}");
        if self.stats_on_hold() {
            return vec![self.request(Call::FetchStats)];
        }
        self.submission = None;
        self.message = MSG_SUBMIT_FAILED.into();
        Vec::new()
    }

    fn advance_due(&mut self, ticket: Ticket) -> Vec<Effect> {
        if self.advance != Some(ticket) {
            debug!("temporizador caducado {ticket:?}");
            return Vec::new();
        }
        self.advance = None;
        if self.screen != Screen::Active || self.verdict.is_none() {
            return Vec::new();
        }

        if self.current_index >= self.configured_count {
            self.finish = Some(FinishReason::Completed);
            self.go_to_stats()
        } else {
            self.question = None;
            self.submission = None;
            self.verdict = None;
            self.screen = Screen::Loading(Loading::Question);
            vec![self.request(Call::FetchQuestion)]
        }
    }

    fn end_requested(&mut self) -> Vec<Effect> {
        if self.screen != Screen::Active {
            debug!("fin ignorado en {:?}", self.screen);
            return Vec::new();
        }
        info!(
            "quiz terminado por el usuario en {}/{}",
            self.current_index, self.configured_count
        );
        self.finish = Some(FinishReason::EndedEarly);
        self.go_to_stats()
    }

    fn stats_received(&mut self, ticket: Ticket, stats: SessionStats) -> Vec<Effect> {
        if !self.claim(Loading::Stats, ticket) {
            return Vec::new();
        }
        self.stats = Some(stats);
        self.message.clear();
        self.screen = Screen::Results;
        Vec::new()
    }

    fn stats_failed(&mut self, ticket: Ticket, err: ClientError) -> Vec<Effect> {
        if !self.claim(Loading::Stats, ticket) {
            return Vec::new();
        }
        warn!("get_stats falló: {err}");
        self.question = None;
        self.message = MSG_STATS_FAILED.into();
        self.screen = Screen::Configuring;
        Vec::new()
    }

    fn play_again_requested(&mut self) -> Vec<Effect> {
        if self.screen != Screen::Results {
            return Vec::new();
        }
        self.stats = None;
        self.question = None;
        self.submission = None;
        self.verdict = None;
        self.message.clear();
        self.screen = Screen::Configuring;
        Vec::new()
    }

    // Motores internos

    /// Pasa a cargar estadísticas, cancelando cualquier avance programado.
    fn go_to_stats(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(ticket) = self.advance.take() {
            effects.push(Effect::CancelAdvance(ticket));
        }
        self.question = None;
        self.submission = None;
        self.verdict = None;
        self.screen = Screen::Loading(Loading::Stats);
        if self.verifying.is_some() {
            // El servidor ya está corrigiendo: las estadísticas esperan al veredicto.
            debug!("estadísticas en espera de la corrección pendiente");
        } else {
            effects.push(self.request(Call::FetchStats));
        }
        effects
    }

    fn request(&mut self, call: Call) -> Effect {
        let ticket = self.issue_ticket();
        self.awaiting = Some(ticket);
        Effect::Request { ticket, call }
    }

    /// Acepta la respuesta solo si estamos cargando `stage` y es la esperada.
    fn claim(&mut self, stage: Loading, ticket: Ticket) -> bool {
        self.screen == Screen::Loading(stage) && self.take_awaiting(ticket)
    }

    fn take_awaiting(&mut self, ticket: Ticket) -> bool {
        if self.awaiting == Some(ticket) {
            self.awaiting = None;
            true
        } else {
            debug!("respuesta obsoleta descartada {ticket:?}");
            false
        }
    }

    fn take_verifying(&mut self, ticket: Ticket) -> bool {
        if self.verifying == Some(ticket) {
            self.verifying = None;
            true
        } else {
            debug!("veredicto obsoleto descartado {ticket:?}");
            false
        }
    }

    /// Se pidió terminar con una corrección en vuelo y aún no se piden estadísticas.
    fn stats_on_hold(&self) -> bool {
        self.screen == Screen::Loading(Loading::Stats) && self.awaiting.is_none()
    }

    fn reset_run(&mut self) {
        self.score = 0;
        self.current_index = 0;
        self.question = None;
        self.submission = None;
        self.verdict = None;
        self.stats = None;
        self.finish = None;
        self.awaiting = None;
        self.verifying = None;
        self.advance = None;
    }
}
