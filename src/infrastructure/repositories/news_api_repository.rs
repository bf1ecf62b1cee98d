use super::news_repository::{NewsRepository, NewsRepositoryError};
use crate::domain::news::{RawArticle, UpstreamQuery};
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use moka::future::Cache;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

const CACHE_CAPACITY: u64 = 500;
const USER_AGENT: &str = "Insight-Backend";

/// Error codes NewsAPI uses for credential problems
const CREDENTIAL_ERROR_CODES: [&str; 3] = ["apiKeyInvalid", "apiKeyMissing", "apiKeyDisabled"];
const RATE_LIMIT_ERROR_CODE: &str = "rateLimited";

/// NewsAPI response envelope
#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<RawArticle>,
}

/// NewsAPI-backed implementation of the news repository
pub struct NewsApiRepository {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    cache: Option<Cache<String, Vec<RawArticle>>>,
}

impl NewsApiRepository {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
        cache_ttl: Option<Duration>,
    ) -> Result<Self, NewsRepositoryError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| NewsRepositoryError::Transport(e.to_string()))?;

        // Keyed by the credential-free query
        let cache = cache_ttl.map(|ttl| {
            Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(ttl)
                .build()
        });

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            cache,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, NewsRepositoryError> {
        let cache_ttl = config
            .news_cache_enabled
            .then(|| Duration::from_secs(config.news_cache_ttl_secs));

        Self::new(
            config.news_api_base_url.clone(),
            config.news_api_key.clone(),
            Duration::from_secs(config.news_api_timeout_secs),
            cache_ttl,
        )
    }

    async fn call_upstream(
        &self,
        query: &UpstreamQuery,
        api_key: &str,
    ) -> Result<Vec<RawArticle>, NewsRepositoryError> {
        let url = format!("{}/{}", self.base_url, query.mode.endpoint());

        tracing::info!(
            endpoint = query.mode.endpoint(),
            country = query.country.as_deref().unwrap_or("-"),
            category = query.category.map(|c| c.as_str()).unwrap_or("-"),
            "Calling news provider"
        );

        let mut params = query.query_pairs();
        params.push(("apiKey", api_key.to_string()));

        let response = self
            .http_client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(transport_error)?;

        // Error bodies are best-effort; the status alone is enough to classify
        let parsed = serde_json::from_str::<NewsApiResponse>(&body);

        if !status.is_success() {
            let (code, message) = match &parsed {
                Ok(envelope) => (envelope.code.as_deref(), envelope.message.as_deref()),
                Err(_) => (None, None),
            };
            return Err(classify_failure(status, code, message));
        }

        let envelope = parsed.map_err(|e| {
            NewsRepositoryError::Transport(format!("Failed to parse provider response: {}", e))
        })?;

        if envelope.status != "ok" {
            return Err(classify_failure(
                status,
                envelope.code.as_deref(),
                envelope.message.as_deref(),
            ));
        }

        tracing::debug!(
            endpoint = query.mode.endpoint(),
            articles = envelope.articles.len(),
            "News provider responded"
        );

        Ok(envelope.articles)
    }
}

#[async_trait]
impl NewsRepository for NewsApiRepository {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch(&self, query: &UpstreamQuery) -> Result<Vec<RawArticle>, NewsRepositoryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(NewsRepositoryError::Unauthorized)?;

        let cache_key = query.cache_key();
        if let Some(cache) = &self.cache {
            if let Some(articles) = cache.get(&cache_key).await {
                tracing::debug!(key = %cache_key, "News cache hit");
                return Ok(articles);
            }
        }

        let articles = self.call_upstream(query, api_key).await.map_err(|e| {
            tracing::warn!(error = %e, endpoint = query.mode.endpoint(), "News provider call failed");
            e
        })?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, articles.clone()).await;
        }

        Ok(articles)
    }
}

/// reqwest errors carry the request URL, and with it the `apiKey` parameter
fn transport_error(err: reqwest::Error) -> NewsRepositoryError {
    let reason = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "connection failed".to_string()
    } else {
        err.without_url().to_string()
    };
    NewsRepositoryError::Transport(reason)
}

/// Map an HTTP status plus NewsAPI error code to a repository error
fn classify_failure(
    status: StatusCode,
    code: Option<&str>,
    message: Option<&str>,
) -> NewsRepositoryError {
    if status == StatusCode::UNAUTHORIZED
        || code.is_some_and(|c| CREDENTIAL_ERROR_CODES.contains(&c))
    {
        return NewsRepositoryError::Unauthorized;
    }
    if status == StatusCode::TOO_MANY_REQUESTS || code == Some(RATE_LIMIT_ERROR_CODE) {
        return NewsRepositoryError::RateLimited;
    }
    let detail = message.or(code).unwrap_or("unknown error");
    NewsRepositoryError::Upstream(format!("status {}: {}", status.as_u16(), detail))
}
