use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthesisServiceError {
    #[error("service error: {0}")]
    Service(String),
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl SynthesisServiceError {
    /// The bare message, without the error kind prefix
    pub fn message(&self) -> &str {
        match self {
            SynthesisServiceError::Service(msg) | SynthesisServiceError::Invalid(msg) => msg,
        }
    }
}

impl From<SynthesisServiceError> for AppError {
    fn from(err: SynthesisServiceError) -> Self {
        match err {
            SynthesisServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SynthesisServiceError::Service(msg) => AppError::ExternalService(msg),
        }
    }
}
