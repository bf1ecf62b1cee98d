//! Headline-similarity clustering.
//!
//! Single greedy pass: each unassigned article seeds a group and absorbs every
//! later unassigned article whose headline is similar enough *to the seed*.
//! Absorbed members are never compared with each other, so two members of one
//! cluster may be mutually dissimilar.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::model::{Article, FeedItem, StoryCluster};

/// Minimum Jaccard similarity for an article to join a seed's cluster
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

pub const CLUSTER_ID_SUFFIX: &str = "-cluster";

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "this", "but",
        "they", "have", "had", "what", "said", "each", "which", "their", "time", "if", "up",
        "out", "many", "then", "them", "these", "so", "some", "her", "would", "make", "like",
        "into", "him", "two", "more", "very", "after", "words", "long", "than", "first", "been",
        "call", "who", "oil", "sit", "now", "find", "down", "day", "did", "get", "come", "made",
        "may", "part",
    ]
    .into_iter()
    .collect()
});

/// Distinct significant tokens of a headline
pub fn headline_tokens(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    PUNCTUATION
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|token| token.chars().count() > 2 && !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Jaccard index of two token sets; 0 when either is empty
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

pub fn headline_similarity(a: &str, b: &str) -> f64 {
    jaccard(&headline_tokens(a), &headline_tokens(b))
}

/// Partition articles into clusters and singletons.
///
/// Clusters come before singletons, then everything is stable-sorted newest
/// first, so equal timestamps keep clusters ahead and seed order within each.
pub fn cluster_articles(articles: Vec<Article>) -> Vec<FeedItem> {
    if articles.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<HashSet<String>> = articles.iter().map(|a| headline_tokens(&a.title)).collect();
    let mut assigned = vec![false; articles.len()];
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for seed in 0..articles.len() {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;
        let mut group = vec![seed];

        for candidate in (seed + 1)..articles.len() {
            if assigned[candidate] {
                continue;
            }
            if jaccard(&tokens[seed], &tokens[candidate]) >= SIMILARITY_THRESHOLD {
                assigned[candidate] = true;
                group.push(candidate);
            }
        }

        groups.push(group);
    }

    let mut slots: Vec<Option<Article>> = articles.into_iter().map(Some).collect();
    let (mut items, singles): (Vec<FeedItem>, Vec<FeedItem>) = groups
        .into_iter()
        .filter_map(|group| {
            let members: Vec<Article> = group
                .into_iter()
                .filter_map(|index| slots[index].take())
                .collect();
            build_item(members)
        })
        .partition(FeedItem::is_cluster);

    let clusters = items.len();
    items.extend(singles);
    items.sort_by(|a, b| b.effective_time().cmp(&a.effective_time()));

    tracing::debug!(
        items = items.len(),
        clusters = clusters,
        "Articles clustered"
    );

    items
}

/// One member stays a bare article; more become a cluster
fn build_item(mut members: Vec<Article>) -> Option<FeedItem> {
    if members.len() < 2 {
        return members.pop().map(FeedItem::Article);
    }

    // Stable, so equal timestamps keep seed order
    members.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    let newest = &members[0];

    // Longest headline wins, newest member on ties
    let mut title = newest.title.clone();
    for member in &members[1..] {
        if member.title.chars().count() > title.chars().count() {
            title = member.title.clone();
        }
    }

    Some(FeedItem::Cluster(StoryCluster {
        id: format!("{}{}", newest.id, CLUSTER_ID_SUFFIX),
        title,
        top_source: newest.source.clone(),
        published_at: newest.published_at,
        articles: members,
    }))
}
