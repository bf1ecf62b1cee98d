use super::cluster::cluster_articles;
use super::error::NewsServiceError;
use super::filters::Filters;
use super::model::{Article, Category, NewsResponse};
use super::normalize::{normalize_article_at, RawArticle};
use super::query::UpstreamQuery;
use super::rank::{filter_by_province, filter_by_time_window, sort_items};
use crate::domain::locale::resolve_jurisdictions;
use crate::infrastructure::repositories::{NewsRepository, NewsRepositoryError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: u32 = 100;

pub struct NewsService {
    news_repo: Arc<dyn NewsRepository>,
    page_size: u32,
}

impl NewsService {
    pub fn new(news_repo: Arc<dyn NewsRepository>, page_size: u32) -> Self {
        Self {
            news_repo,
            page_size,
        }
    }
}

#[async_trait]
pub trait NewsServiceApi: Send + Sync {
    /// Build the aggregated feed for a set of validated filters
    ///
    /// This operation:
    /// - Resolves the filters to a bounded list of jurisdictions
    /// - Fetches every jurisdiction concurrently, tolerating partial failure
    /// - Normalizes, deduplicates, filters, clusters and sorts the result
    async fn get_news(&self, filters: Filters) -> Result<NewsResponse, NewsServiceError>;
}

#[async_trait]
impl NewsServiceApi for NewsService {
    async fn get_news(&self, filters: Filters) -> Result<NewsResponse, NewsServiceError> {
        // 1. Credential check, before any fetch
        if !self.news_repo.has_credential() {
            tracing::error!("News provider credential is not configured");
            return Err(NewsServiceError::MissingCredential);
        }

        let now = Utc::now();

        // 2. Resolve jurisdictions
        let jurisdictions = resolve_jurisdictions(filters.country.as_deref(), filters.region);

        // 3. Fetch
        let articles = if jurisdictions.is_empty() {
            self.fetch_global(&filters, now).await?
        } else {
            self.fetch_jurisdictions(&filters, &jurisdictions, now).await?
        };
        let fetched = articles.len();

        // 4. Deduplicate, then local filters
        let mut articles = dedupe(articles);
        if let Some(province) = &filters.province {
            articles = filter_by_province(articles, province);
        }
        if let Some(window) = filters.time {
            articles = filter_by_time_window(articles, window, now);
        }

        // 5. Cluster and rank
        let items = sort_items(cluster_articles(articles), filters.sort);

        tracing::info!(
            jurisdictions = jurisdictions.len(),
            fetched = fetched,
            items = items.len(),
            "News feed assembled"
        );

        Ok(NewsResponse {
            total: items.len(),
            items,
            filters,
        })
    }
}

/// Settled result of one jurisdiction's fetch
enum FetchOutcome {
    Fetched(Vec<Article>),
    Failed(NewsRepositoryError),
}

impl NewsService {
    /// Single call with no jurisdiction. Nothing to salvage, so every failure propagates.
    async fn fetch_global(
        &self,
        filters: &Filters,
        now: DateTime<Utc>,
    ) -> Result<Vec<Article>, NewsServiceError> {
        let query = UpstreamQuery::build(filters, None, self.page_size, now);
        let raw = self.news_repo.fetch(&query).await?;
        Ok(tag_articles(raw, None, query.category, now))
    }

    /// One task per jurisdiction, merged in list order once all have settled
    async fn fetch_jurisdictions(
        &self,
        filters: &Filters,
        jurisdictions: &[String],
        now: DateTime<Utc>,
    ) -> Result<Vec<Article>, NewsServiceError> {
        let handles: Vec<_> = jurisdictions
            .iter()
            .map(|code| {
                let query = UpstreamQuery::build(filters, Some(code), self.page_size, now);
                tokio::spawn(fetch_jurisdiction(
                    self.news_repo.clone(),
                    query,
                    code.clone(),
                    now,
                ))
            })
            .collect();

        let mut merged = Vec::new();
        let mut failed = 0;

        for (code, joined) in jurisdictions.iter().zip(join_all(handles).await) {
            let outcome = joined.unwrap_or_else(|e| {
                FetchOutcome::Failed(NewsRepositoryError::Transport(format!(
                    "fetch task aborted: {}",
                    e
                )))
            });

            match outcome {
                FetchOutcome::Fetched(articles) => merged.extend(articles),
                FetchOutcome::Failed(e) if e.is_credential_error() => {
                    tracing::error!(country = %code, "News provider rejected the credential");
                    return Err(e.into());
                }
                FetchOutcome::Failed(e) => {
                    failed += 1;
                    tracing::warn!(country = %code, error = %e, "Jurisdiction fetch failed");
                }
            }
        }

        if failed == jurisdictions.len() {
            tracing::warn!(
                jurisdictions = jurisdictions.len(),
                "Every jurisdiction fetch failed, returning an empty feed"
            );
        }

        Ok(merged)
    }
}

/// Fetch one jurisdiction, relaxing the category once if nothing usable came back
async fn fetch_jurisdiction(
    news_repo: Arc<dyn NewsRepository>,
    query: UpstreamQuery,
    jurisdiction: String,
    now: DateTime<Utc>,
) -> FetchOutcome {
    let mut used = query;
    let mut result = news_repo.fetch(&used).await;

    let unusable = match &result {
        Ok(raw) => raw.is_empty(),
        Err(e) => !e.is_credential_error(),
    };

    if unusable && used.can_relax() {
        tracing::debug!(
            country = %jurisdiction,
            category = used.category.map(|c| c.as_str()).unwrap_or("-"),
            "Retrying jurisdiction with the default category"
        );
        used = used.relaxed();
        result = news_repo.fetch(&used).await;
    }

    match result {
        Ok(raw) => FetchOutcome::Fetched(tag_articles(raw, Some(&jurisdiction), used.category, now)),
        Err(e) => FetchOutcome::Failed(e),
    }
}

/// Normalize, filling in the country and category the call was made for
fn tag_articles(
    raw: Vec<RawArticle>,
    jurisdiction: Option<&str>,
    category: Option<Category>,
    now: DateTime<Utc>,
) -> Vec<Article> {
    raw.into_iter()
        .map(|record| {
            let mut article = normalize_article_at(record, now);
            if article.country.is_none() {
                article.country = jurisdiction.map(str::to_string);
            }
            if article.category.is_none() {
                article.category = category;
            }
            article
        })
        .collect()
}

/// Keep the first occurrence of each id
fn dedupe(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(article.id.clone()))
        .collect()
}
