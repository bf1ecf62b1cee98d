use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::model::{Article, Category};

pub const UNTITLED: &str = "No title";
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Hex characters kept from the content hash
const ID_LENGTH: usize = 16;

/// Article record as returned by the upstream provider.
///
/// Accepts both NewsAPI field names and the generic ones other providers use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default, rename = "publishedAt", alias = "published_at")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
}

/// NewsAPI nests the publisher as `{id, name}`, other providers send a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSource {
    Named {
        #[serde(default)]
        name: Option<String>,
    },
    Plain(String),
}

impl RawSource {
    fn name(&self) -> Option<&str> {
        match self {
            RawSource::Named { name } => name.as_deref(),
            RawSource::Plain(name) => Some(name.as_str()),
        }
    }
}

/// Stable identifier derived from (title, url, publishedAt)
pub fn article_id(title: &str, url: &str, published_at: &str) -> String {
    let digest = Sha256::digest(format!("{}|{}|{}", title, url, published_at).as_bytes());
    let mut id = format!("{:x}", digest);
    id.truncate(ID_LENGTH);
    id
}

pub fn normalize_article(raw: RawArticle) -> Article {
    normalize_article_at(raw, Utc::now())
}

/// Map one upstream record to an [`Article`]. Never fails: missing optionals
/// stay absent, a missing title or timestamp gets a placeholder.
pub fn normalize_article_at(raw: RawArticle, now: DateTime<Utc>) -> Article {
    // The id hashes the raw values so it does not depend on defaults
    let id = article_id(
        raw.title.as_deref().unwrap_or(""),
        raw.url.as_deref().unwrap_or(""),
        raw.published_at.as_deref().unwrap_or(""),
    );

    let published_at = present(raw.published_at)
        .and_then(|ts| DateTime::parse_from_rfc3339(&ts).ok())
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or(now);

    Article {
        id,
        title: present(raw.title).unwrap_or_else(|| UNTITLED.to_string()),
        description: present(raw.description),
        url: raw.url.unwrap_or_default(),
        image_url: present(raw.url_to_image)
            .or_else(|| present(raw.image_url))
            .or_else(|| present(raw.image)),
        source: raw
            .source
            .as_ref()
            .and_then(RawSource::name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_SOURCE)
            .to_string(),
        published_at,
        country: present(raw.country).map(|c| c.to_lowercase()),
        category: present(raw.category).and_then(|c| Category::from_param(&c)),
        province: present(raw.province).map(|p| p.to_uppercase()),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
