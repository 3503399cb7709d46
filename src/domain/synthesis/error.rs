use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<SynthesisServiceError> for AppError {
    fn from(err: SynthesisServiceError) -> Self {
        match err {
            SynthesisServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SynthesisServiceError::Dependency(msg) => AppError::ExternalService(msg),
            SynthesisServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
