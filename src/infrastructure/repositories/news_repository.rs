use crate::domain::news::{RawArticle, UpstreamQuery};
use async_trait::async_trait;

/// Failures of a single upstream call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NewsRepositoryError {
    /// Provider refused the credential (HTTP 401 or an api-key error code)
    #[error("news provider rejected the credential")]
    Unauthorized,
    #[error("news provider rate limit exceeded")]
    RateLimited,
    /// Provider answered with an error status or error payload
    #[error("news provider error: {0}")]
    Upstream(String),
    /// Request never produced a usable answer (connect, timeout, decode)
    #[error("news provider unreachable: {0}")]
    Transport(String),
}

impl NewsRepositoryError {
    /// Errors that should abort the whole request rather than one jurisdiction
    pub fn is_credential_error(&self) -> bool {
        matches!(self, NewsRepositoryError::Unauthorized)
    }
}

/// Source of raw articles.
/// Abstracts the upstream provider so the pipeline can run against a stub.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Whether a credential is configured at all
    fn has_credential(&self) -> bool;

    /// Execute one upstream call
    ///
    /// # Errors
    /// Returns a classified error when the provider refuses or cannot be reached
    async fn fetch(&self, query: &UpstreamQuery) -> Result<Vec<RawArticle>, NewsRepositoryError>;
}
