use chrono::{DateTime, SecondsFormat, Utc};

use super::filters::Filters;
use super::model::{Category, SortOrder, TimeWindow};
use crate::domain::locale;

/// Search term used when search mode is entered without a query
pub const FALLBACK_SEARCH_TERM: &str = "news";

/// Upstream query mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryMode {
    /// Free-text search over all articles; needs a query string
    Search,
    /// Top headlines by category and/or country
    Headlines,
}

impl QueryMode {
    /// Endpoint path relative to the provider base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            QueryMode::Search => "everything",
            QueryMode::Headlines => "top-headlines",
        }
    }
}

/// One fully-formed upstream call, minus the credential
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamQuery {
    pub mode: QueryMode,
    pub q: Option<String>,
    pub category: Option<Category>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub sort_by: Option<SortOrder>,
    pub page_size: u32,
}

impl UpstreamQuery {
    /// Build the call for one jurisdiction (or the global call when `None`).
    ///
    /// A free-text query, or no structured filter at all, selects search mode;
    /// otherwise headlines mode, where a missing category defaults to general.
    pub fn build(
        filters: &Filters,
        jurisdiction: Option<&str>,
        page_size: u32,
        now: DateTime<Utc>,
    ) -> Self {
        let unstructured = filters.is_unstructured() && jurisdiction.is_none();

        if filters.q.is_some() || unstructured {
            let window = filters.time.unwrap_or(TimeWindow::DEFAULT_SEARCH);
            return Self {
                mode: QueryMode::Search,
                q: Some(
                    filters
                        .q
                        .clone()
                        .unwrap_or_else(|| FALLBACK_SEARCH_TERM.to_string()),
                ),
                category: None,
                country: None,
                language: jurisdiction.map(|code| locale::country_language(code).to_string()),
                from: Some(window.start(now)),
                to: Some(now),
                sort_by: Some(filters.sort),
                page_size,
            };
        }

        Self {
            mode: QueryMode::Headlines,
            q: None,
            category: Some(filters.category.unwrap_or(Category::DEFAULT)),
            country: jurisdiction.map(str::to_string),
            language: None,
            from: None,
            to: None,
            sort_by: None,
            page_size,
        }
    }

    /// Same call with the category relaxed to the default
    pub fn relaxed(&self) -> Self {
        Self {
            category: Some(Category::DEFAULT),
            ..self.clone()
        }
    }

    /// Whether an empty or failed result deserves a retry with [`Self::relaxed`]
    pub fn can_relax(&self) -> bool {
        self.mode == QueryMode::Headlines
            && self.category.is_some_and(|c| c != Category::DEFAULT)
    }

    /// Query-string pairs in a fixed order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(language) = &self.language {
            pairs.push(("language", language.clone()));
        }
        if let Some(from) = self.from {
            pairs.push(("from", from.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.as_str().to_string()));
        }
        pairs.push(("pageSize", self.page_size.to_string()));
        pairs
    }

    /// Stable key identifying this call, e.g. for caching
    pub fn cache_key(&self) -> String {
        let params: Vec<String> = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        format!("{}?{}", self.mode.endpoint(), params.join("&"))
    }
}
