use chrono::{DateTime, Utc};

use super::model::{Article, FeedItem, SortOrder, TimeWindow};
use crate::domain::locale;

/// Order feed items. Both policies are stable.
pub fn sort_items(mut items: Vec<FeedItem>, sort: SortOrder) -> Vec<FeedItem> {
    match sort {
        SortOrder::PublishedAt => {
            items.sort_by(|a, b| b.effective_time().cmp(&a.effective_time()));
        }
        SortOrder::Relevancy => {
            // Clusters first, input order kept inside each bucket
            items.sort_by_key(|item| !item.is_cluster());
        }
    }
    items
}

/// Keep articles that mention the province (code or name) or are tagged with it
pub fn filter_by_province(articles: Vec<Article>, province_code: &str) -> Vec<Article> {
    let code = province_code.to_lowercase();
    let name = locale::province_name(province_code).map(str::to_lowercase);

    let before = articles.len();
    let kept: Vec<Article> = articles
        .into_iter()
        .filter(|article| {
            if article
                .province
                .as_deref()
                .is_some_and(|tag| tag.eq_ignore_ascii_case(province_code))
            {
                return true;
            }
            let text = format!(
                "{} {}",
                article.title,
                article.description.as_deref().unwrap_or("")
            )
            .to_lowercase();
            text.contains(&code) || name.as_deref().is_some_and(|n| text.contains(n))
        })
        .collect();

    tracing::debug!(
        province = province_code,
        before = before,
        after = kept.len(),
        "Province filter applied"
    );

    kept
}

/// Drop articles published before the start of the window
pub fn filter_by_time_window(
    articles: Vec<Article>,
    window: TimeWindow,
    now: DateTime<Utc>,
) -> Vec<Article> {
    let start = window.start(now);
    articles
        .into_iter()
        .filter(|article| article.published_at >= start)
        .collect()
}
