#![allow(dead_code)]

use adaptive_quiz::client::QuizService;
use adaptive_quiz::error::ClientError;
use adaptive_quiz::model::{Question, QuestionKind, SessionStats, TopicStat, Verdict};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Pregunta del banco falso junto con su respuesta canónica.
#[derive(Clone)]
pub struct Scripted {
    pub question: Question,
    pub canonical: String,
}

pub fn tf(topic: &str, canonical: bool) -> Scripted {
    Scripted {
        question: Question {
            topic: topic.into(),
            difficulty: 1,
            text: "¿Verdadero o falso?".into(),
            kind: QuestionKind::TrueFalse,
        },
        canonical: canonical.to_string(),
    }
}

pub fn mc(topic: &str, correct: usize) -> Scripted {
    let options: Vec<String> = ["A", "B", "C", "D"]
        .iter()
        .map(|l| format!("{l}) opción {l}"))
        .collect();
    Scripted {
        canonical: options[correct].clone(),
        question: Question {
            topic: topic.into(),
            difficulty: 2,
            text: "Elige una".into(),
            kind: QuestionKind::MultipleChoice { options },
        },
    }
}

pub fn fib(topic: &str, canonical: &str) -> Scripted {
    Scripted {
        question: Question {
            topic: topic.into(),
            difficulty: 3,
            text: "Completa: ___".into(),
            kind: QuestionKind::FillInBlank,
        },
        canonical: canonical.into(),
    }
}

/// Respuesta correcta o incorrecta para una pregunta del guion.
pub fn answer_for(s: &Scripted, correct: bool) -> String {
    match &s.question.kind {
        QuestionKind::MultipleChoice { .. } => {
            let letter = s.canonical.chars().next().unwrap();
            if correct {
                letter.to_string()
            } else if letter == 'A' {
                "B".into()
            } else {
                "A".into()
            }
        }
        QuestionKind::TrueFalse => {
            if correct {
                s.canonical.clone()
            } else if s.canonical == "true" {
                "false".into()
            } else {
                "true".into()
            }
        }
        QuestionKind::FillInBlank => {
            if correct {
                s.canonical.clone()
            } else {
                "otra cosa".into()
            }
        }
    }
}

#[derive(Default)]
struct State {
    bank: VecDeque<Scripted>,
    current: Option<Scripted>,
    served: usize,
    served_before_stats: Option<usize>,
    submissions: Vec<String>,
    results: Vec<(String, bool)>,
    fail_start: bool,
    fail_questions: bool,
    fail_stats: bool,
}

/// Servicio en memoria que corrige como el servidor real.
#[derive(Default)]
pub struct FakeService {
    state: Mutex<State>,
}

impl FakeService {
    pub fn with_bank(bank: Vec<Scripted>) -> Self {
        let service = Self::default();
        service.state.lock().unwrap().bank = bank.into();
        service
    }

    pub fn failing_start(self) -> Self {
        self.state.lock().unwrap().fail_start = true;
        self
    }

    pub fn failing_questions(self) -> Self {
        self.state.lock().unwrap().fail_questions = true;
        self
    }

    pub fn failing_stats(self) -> Self {
        self.state.lock().unwrap().fail_stats = true;
        self
    }

    pub fn current(&self) -> Scripted {
        self.state.lock().unwrap().current.clone().unwrap()
    }

    pub fn served(&self) -> usize {
        self.state.lock().unwrap().served
    }

    pub fn served_before_stats(&self) -> Option<usize> {
        self.state.lock().unwrap().served_before_stats
    }

    pub fn submissions(&self) -> Vec<String> {
        self.state.lock().unwrap().submissions.clone()
    }
}

impl QuizService for FakeService {
    fn start_session(&self) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_start {
            return Err(ClientError::Connectivity("connection refused".into()));
        }
        state.results.clear();
        Ok(())
    }

    fn fetch_question(&self) -> Result<Question, ClientError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_questions {
            return Err(ClientError::Status { status: 500, body: String::new() });
        }
        match state.bank.pop_front() {
            Some(next) => {
                state.served += 1;
                state.current = Some(next.clone());
                Ok(next.question)
            }
            None => Err(ClientError::Exhausted("No more questions available!".into())),
        }
    }

    fn submit_answer(&self, answer: &str) -> Result<Verdict, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.submissions.push(answer.to_string());
        let current = state.current.clone().ok_or(ClientError::Status {
            status: 400,
            body: "No question has been asked yet.".into(),
        })?;
        let is_correct = match current.question.kind {
            QuestionKind::MultipleChoice { .. } => {
                current.canonical.chars().next() == answer.chars().next()
            }
            _ => answer.trim().eq_ignore_ascii_case(&current.canonical),
        };
        state.results.push((current.question.topic.clone(), is_correct));
        Ok(Verdict {
            is_correct,
            correct_answer: current.canonical,
        })
    }

    fn fetch_stats(&self) -> Result<SessionStats, ClientError> {
        let mut state = self.state.lock().unwrap();
        let served = state.served;
        state.served_before_stats = Some(served);
        if state.fail_stats {
            return Err(ClientError::Connectivity("timeout".into()));
        }

        let mut topics: Vec<TopicStat> = Vec::new();
        for (topic, correct) in &state.results {
            let entry = match topics.iter().position(|t| &t.topic == topic) {
                Some(i) => &mut topics[i],
                None => {
                    topics.push(TopicStat {
                        topic: topic.clone(),
                        correct: 0,
                        attempted: 0,
                        score: 0.0,
                    });
                    topics.last_mut().unwrap()
                }
            };
            entry.attempted += 1;
            if *correct {
                entry.correct += 1;
            }
            entry.score = entry.correct as f64 / entry.attempted as f64 * 100.0;
        }

        Ok(SessionStats {
            username: "QuizUser".into(),
            overall_difficulty: 1,
            message: topics.is_empty().then(|| "No stats to display yet.".to_string()),
            topics,
        })
    }
}
