use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::filters::Filters;

/// One upstream story in canonical shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Content hash of (title, url, publishedAt)
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub source: String,
    pub published_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

/// Two or more articles judged to report the same story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryCluster {
    pub id: String,
    /// Longest member headline
    pub title: String,
    /// Newest first
    pub articles: Vec<Article>,
    pub top_source: String,
    pub published_at: DateTime<Utc>,
}

/// What the feed is made of: a bare article or a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedItem {
    // Cluster first so untagged deserialization checks for `articles` before falling back
    Cluster(StoryCluster),
    Article(Article),
}

impl FeedItem {
    pub fn id(&self) -> &str {
        match self {
            FeedItem::Article(article) => &article.id,
            FeedItem::Cluster(cluster) => &cluster.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            FeedItem::Article(article) => &article.title,
            FeedItem::Cluster(cluster) => &cluster.title,
        }
    }

    /// Own timestamp for an article, newest member's for a cluster
    pub fn effective_time(&self) -> DateTime<Utc> {
        match self {
            FeedItem::Article(article) => article.published_at,
            FeedItem::Cluster(cluster) => cluster.published_at,
        }
    }

    pub fn is_cluster(&self) -> bool {
        matches!(self, FeedItem::Cluster(_))
    }
}

/// Response for GET /api/news
#[derive(Debug, Serialize, Deserialize)]
pub struct NewsResponse {
    pub filters: Filters,
    pub total: usize,
    pub items: Vec<FeedItem>,
}

/// Upstream headline categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::General,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    /// Category used when a call needs one and the caller gave none
    pub const DEFAULT: Category = Category::General;

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Category::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How far back a request looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "24h")]
    Last24Hours,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
}

impl TimeWindow {
    /// Window applied to search-mode calls when the caller gave none
    pub const DEFAULT_SEARCH: TimeWindow = TimeWindow::Last7Days;

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Last24Hours => "24h",
            TimeWindow::Last7Days => "7d",
            TimeWindow::Last30Days => "30d",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "24h" => Some(TimeWindow::Last24Hours),
            "7d" => Some(TimeWindow::Last7Days),
            "30d" => Some(TimeWindow::Last30Days),
            _ => None,
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            TimeWindow::Last24Hours => Duration::hours(24),
            TimeWindow::Last7Days => Duration::days(7),
            TimeWindow::Last30Days => Duration::days(30),
        }
    }

    /// Earliest instant inside the window
    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.duration()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "publishedAt")]
    PublishedAt,
    #[serde(rename = "relevancy")]
    Relevancy,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PublishedAt => "publishedAt",
            SortOrder::Relevancy => "relevancy",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("publishedAt") => Some(SortOrder::PublishedAt),
            v if v.eq_ignore_ascii_case("relevancy") => Some(SortOrder::Relevancy),
            _ => None,
        }
    }
}
