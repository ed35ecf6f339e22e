use thiserror::Error;

/// Fallos del adaptador remoto. Nunca salen de la máquina de estados:
/// cada uno se traduce en un evento.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("No se pudo conectar con el servidor del quiz: {0}")]
    Connectivity(String),

    #[error("El servidor respondió HTTP {status}")]
    Status { status: u16, body: String },

    /// El servicio informa de que no quedan preguntas para esta sesión.
    #[error("{0}")]
    Exhausted(String),

    #[error("Respuesta JSON inválida del servidor: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, ClientError::Exhausted(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        ClientError::Connectivity(error.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Decode(error.to_string())
    }
}
