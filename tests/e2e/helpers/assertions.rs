use serde_json::Value;

/// Bare article shape in a news response
pub fn assert_article_response(article: &Value) {
    for field in ["id", "title", "url", "source", "publishedAt"] {
        assert!(
            article.get(field).and_then(|v| v.as_str()).is_some(),
            "Missing article field '{}': {}",
            field,
            article
        );
    }
    assert!(article.get("articles").is_none(), "Article must not carry members");
}

/// Cluster shape; returns the member count
pub fn assert_cluster_response(cluster: &Value) -> usize {
    for field in ["id", "title", "topSource", "publishedAt"] {
        assert!(
            cluster.get(field).and_then(|v| v.as_str()).is_some(),
            "Missing cluster field '{}': {}",
            field,
            cluster
        );
    }
    let members = cluster["articles"]
        .as_array()
        .expect("Cluster must carry an articles array");
    assert!(members.len() >= 2, "Cluster must have at least two members");
    for member in members {
        assert_article_response(member);
    }
    assert!(
        cluster["id"].as_str().unwrap().ends_with("-cluster"),
        "Cluster id must end with -cluster"
    );
    members.len()
}

pub fn is_cluster(item: &Value) -> bool {
    item.get("articles").is_some()
}

/// Top-level news response shape; returns the items
pub fn assert_news_response(body: &Value) -> &Vec<Value> {
    assert!(body.get("filters").is_some(), "Missing filters");
    let items = body["items"].as_array().expect("Missing items array");
    assert_eq!(
        body["total"].as_u64(),
        Some(items.len() as u64),
        "total must equal the number of items"
    );
    for item in items {
        if is_cluster(item) {
            assert_cluster_response(item);
        } else {
            assert_article_response(item);
        }
    }
    items
}
