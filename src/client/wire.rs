// Cuerpos JSON tal como viajan por la red.
use crate::error::ClientError;
use crate::model::{Question, QuestionKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct AnswerRequest<'a> {
    pub answer: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
enum QuestionType {
    #[serde(rename = "MC")]
    MultipleChoice,
    #[serde(rename = "TF")]
    TrueFalse,
    #[serde(rename = "FIB")]
    FillInBlank,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionPayload {
    topic: String,
    difficulty: u8,
    #[serde(rename = "type")]
    kind: QuestionType,
    #[serde(rename = "questionText")]
    question_text: String,
    #[serde(default)]
    options: Option<Vec<String>>,
}

impl TryFrom<QuestionPayload> for Question {
    type Error = ClientError;

    fn try_from(payload: QuestionPayload) -> Result<Self, Self::Error> {
        let kind = match payload.kind {
            QuestionType::MultipleChoice => {
                let options = payload.options.unwrap_or_default();
                if options.is_empty() {
                    return Err(ClientError::Decode(
                        "pregunta MC sin opciones".to_string(),
                    ));
                }
                QuestionKind::MultipleChoice { options }
            }
            QuestionType::TrueFalse => QuestionKind::TrueFalse,
            QuestionType::FillInBlank => QuestionKind::FillInBlank,
        };

        Ok(Question {
            topic: payload.topic,
            difficulty: payload.difficulty,
            text: payload.question_text,
            kind,
        })
    }
}
