use crate::error::AppError;
use crate::infrastructure::repositories::NewsRepositoryError;

/// Errors that abort the news pipeline. Per-jurisdiction failures never reach
/// this type; they are absorbed by the fan-out.
#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    /// No upstream credential is configured
    #[error("news provider credential is not configured")]
    MissingCredential,
    /// Upstream refused the configured credential
    #[error("news provider rejected the configured credential")]
    CredentialRejected,
    #[error("news provider rate limit exceeded")]
    RateLimited,
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<NewsRepositoryError> for NewsServiceError {
    fn from(err: NewsRepositoryError) -> Self {
        match err {
            NewsRepositoryError::Unauthorized => NewsServiceError::CredentialRejected,
            NewsRepositoryError::RateLimited => NewsServiceError::RateLimited,
            other => NewsServiceError::Dependency(other.to_string()),
        }
    }
}

impl From<NewsServiceError> for AppError {
    fn from(err: NewsServiceError) -> Self {
        match err {
            NewsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            // Credential messages stay generic
            NewsServiceError::MissingCredential => {
                AppError::Configuration("News provider is not configured".to_string())
            }
            NewsServiceError::CredentialRejected => {
                AppError::Unauthorized("News provider rejected the server credential".to_string())
            }
            NewsServiceError::RateLimited => AppError::RateLimitExceeded(
                "News provider rate limit reached. Please try again later.".to_string(),
            ),
            // Detail stays in the log; provider output never reaches the client
            NewsServiceError::Dependency(msg) => {
                tracing::error!(error = %msg, "News provider call failed");
                AppError::ExternalService("News provider request failed".to_string())
            }
        }
    }
}
