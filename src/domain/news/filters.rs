use serde::{Deserialize, Serialize};

use super::error::NewsServiceError;
use super::model::{Category, SortOrder, TimeWindow};
use crate::domain::locale::{self, Region};

/// Maximum length of the free-text query, in characters
pub const MAX_QUERY_LENGTH: usize = 200;

/// Raw query-string parameters for GET /api/news
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

/// Validated, normalized request filters. Immutable once built.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Lowercase ISO 3166-1 alpha-2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Uppercase ISO 3166-2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeWindow>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl Filters {
    /// Validate raw parameters. Empty values count as absent.
    pub fn from_params(params: FilterParams) -> Result<Self, NewsServiceError> {
        let q = match non_empty(params.q) {
            Some(q) if q.chars().count() > MAX_QUERY_LENGTH => {
                return Err(NewsServiceError::Invalid(format!(
                    "Query must be at most {} characters",
                    MAX_QUERY_LENGTH
                )));
            }
            other => other,
        };

        let category = non_empty(params.category)
            .map(|value| {
                Category::from_param(&value).ok_or_else(|| {
                    NewsServiceError::Invalid(format!(
                        "Unsupported category. Expected one of: {}",
                        Category::ALL.map(|c| c.as_str()).join(", ")
                    ))
                })
            })
            .transpose()?;

        let mut country = non_empty(params.country)
            .map(|value| {
                let code = value.to_lowercase();
                if locale::is_known_country(&code) {
                    Ok(code)
                } else {
                    Err(NewsServiceError::Invalid("Unsupported country code".to_string()))
                }
            })
            .transpose()?;

        let region = non_empty(params.region)
            .map(|value| {
                Region::from_param(&value).ok_or_else(|| {
                    NewsServiceError::Invalid(format!(
                        "Unsupported region. Expected one of: {}",
                        Region::ALL.map(|r| r.as_str()).join(", ")
                    ))
                })
            })
            .transpose()?;

        let province = match non_empty(params.province) {
            Some(value) => {
                let province =
                    locale::find_province(&value, country.as_deref()).ok_or_else(|| {
                        NewsServiceError::Invalid(match &country {
                            Some(code) => format!(
                                "Unsupported province for country {}",
                                code.to_uppercase()
                            ),
                            None => "Unsupported province".to_string(),
                        })
                    })?;
                // A province implies its country
                if country.is_none() {
                    country = Some(province.country.to_string());
                }
                Some(province.code.to_string())
            }
            None => None,
        };

        let time = non_empty(params.time)
            .map(|value| {
                TimeWindow::from_param(&value).ok_or_else(|| {
                    NewsServiceError::Invalid(
                        "Unsupported time window. Expected one of: 24h, 7d, 30d".to_string(),
                    )
                })
            })
            .transpose()?;

        let sort = non_empty(params.sort)
            .map(|value| {
                SortOrder::from_param(&value).ok_or_else(|| {
                    NewsServiceError::Invalid(
                        "Unsupported sort. Expected one of: publishedAt, relevancy".to_string(),
                    )
                })
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            q,
            category,
            country,
            region,
            province,
            time,
            sort,
        })
    }

    /// True when no structured filter narrows the request
    pub fn is_unstructured(&self) -> bool {
        self.category.is_none() && self.country.is_none() && self.region.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
