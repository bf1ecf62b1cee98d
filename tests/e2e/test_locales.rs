use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use std::collections::HashSet;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_all_regions_with_countries(ctx: &TestContext) {
    let response = ctx.client.get("/api/locales").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let regions = body["regions"].as_array().unwrap();

    let ids: Vec<&str> = regions.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec!["africa", "europe", "americas", "asia", "middle_east", "oceania"]
    );

    for region in regions {
        assert!(region["name"].is_string());
        let countries = region["countries"].as_array().unwrap();
        assert!(
            !countries.is_empty() && countries.len() <= 10,
            "Region '{}' should list between 1 and 10 countries",
            region["id"]
        );
        for country in countries {
            assert!(country["code"].is_string());
            assert!(country["name"].is_string());
            assert!(country["provinces"].is_array());
        }
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_nest_provinces_under_their_country(ctx: &TestContext) {
    let response = ctx.client.get("/api/locales").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let countries: Vec<&serde_json::Value> = body["regions"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|r| r["countries"].as_array().unwrap())
        .collect();

    let canada = countries
        .iter()
        .find(|c| c["code"] == "ca")
        .expect("Canada should be listed");
    assert_eq!(canada["name"], "Canada");

    let codes: HashSet<&str> = canada["provinces"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["code"].as_str().unwrap())
        .collect();
    assert!(codes.contains("CA-ON"));
    assert!(codes.iter().all(|code| code.starts_with("CA-")));
}
