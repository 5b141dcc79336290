use crate::common::{TEST_KEY, client_for, config_for, params};
use ahrefs_client::prelude::*;
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};

#[tokio::test]
async fn header_auth_sends_prefixed_credential() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/site-explorer/domain-rating")
        .match_header("authorization", "Bearer test-key")
        .match_query(Matcher::Exact("domain=ahrefs.com".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"domain_rating": {"domain_rating": 91.0}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let result = client
        .get_category(
            Category::SiteExplorer,
            "domain-rating",
            params(json!({"domain": "ahrefs.com"})),
        )
        .await
        .expect("should succeed");

    assert_json_eq!(result, json!({"domain_rating": {"domain_rating": 91.0}}));
    mock.assert_async().await;
}

#[tokio::test]
async fn custom_header_name_and_empty_prefix() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/public/crawler-ip-ranges")
        .match_header("x-api-key", TEST_KEY)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let config = config_for(&server.url()).with_header_auth("X-Api-Key", "");
    let client = Client::new(config).unwrap();
    client
        .get_category(Category::Public, "crawler-ip-ranges", Params::new())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn query_auth_adds_param_and_no_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/serp/overview")
        .match_header("authorization", Matcher::Missing)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "rust".into()),
            Matcher::UrlEncoded("token".into(), TEST_KEY.into()),
        ]))
        .with_status(200)
        .with_body(r#"{"positions": []}"#)
        .expect(1)
        .create_async()
        .await;

    let config = config_for(&server.url()).with_query_auth("token");
    let client = Client::new(config).unwrap();
    let result = client
        .get_category(Category::Serp, "overview", params(json!({"query": "rust"})))
        .await
        .unwrap();

    assert_eq!(result["positions"], json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn auth_query_param_wins_over_caller_param() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/backlinks")
        .match_query(Matcher::Exact("token=test-key".to_string()))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let config = config_for(&server.url()).with_query_auth("token");
    let client = Client::new(config).unwrap();
    client
        .get("/v1/backlinks", params(json!({"token": "caller-supplied"})))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn path_override_is_used_and_not_leaked_into_query() {
    let mut server = Server::new_async().await;
    let default_path = server
        .mock("GET", "/backlinks/broken")
        .expect(0)
        .create_async()
        .await;
    let mock = server
        .mock("GET", "/custom/x")
        .match_query(Matcher::Exact("target=example.com".to_string()))
        .with_status(200)
        .with_body(r#"{"ok": true}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let result = client
        .get_category(
            Category::Backlinks,
            "broken",
            params(json!({"target": "example.com", "path": "/custom/x"})),
        )
        .await
        .unwrap();

    assert_eq!(result["ok"], true);
    mock.assert_async().await;
    default_path.assert_async().await;
}

#[tokio::test]
async fn missing_credential_fails_before_any_network_call() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = ClientConfig::new().with_base_url(server.url());
    let client = Client::new(config).expect("construction never needs a credential");

    let err = client
        .get_category(Category::Public, "crawler-ip-addresses", Params::new())
        .await
        .unwrap_err();

    match err {
        ApiError::Auth { status_code, .. } => assert_eq!(status_code, None),
        other => panic!("Expected auth error, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn credential_override_builds_independent_client() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/subscription/limits-and-usage")
        .match_header("authorization", "Bearer per-request")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let default_client = Client::new(
        ClientConfig::new()
            .with_base_url(server.url())
            .with_rate_limit_per_min(1),
    )
    .unwrap();
    let override_client = default_client.with_credential("per-request").unwrap();

    assert!(default_client.rate_limiter().check());
    override_client
        .get_category(Category::Subscription, "limits-and-usage", Params::new())
        .await
        .expect("override client has its own bucket");

    mock.assert_async().await;
}

#[tokio::test]
async fn json_body_is_sent_on_post() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/batch-analysis")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::Json(json!({
            "items": ["a.com", "b.com"],
            "select": "domain_rating"
        })))
        .with_status(200)
        .with_body(r#"{"targets": 2}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let result = client
        .post_batch_analysis(
            vec!["a.com".to_string(), "b.com".to_string()],
            params(json!({"select": "domain_rating"})),
        )
        .await
        .unwrap();

    assert_eq!(result["targets"], 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn batch_analysis_path_override_stays_out_of_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v3/batch-analysis")
        .match_body(Matcher::Json(json!({"items": ["a.com"]})))
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    client
        .post_batch_analysis(
            vec!["a.com".to_string()],
            params(json!({"path": "/v3/batch-analysis"})),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn batch_returns_results_in_input_order() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/one")
        .with_status(200)
        .with_body(r#"{"n": 1}"#)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("POST", "/two")
        .match_body(Matcher::Json(json!({"x": 1})))
        .with_status(200)
        .with_body(r#"{"n": 2}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let results = client
        .batch(vec![
            BatchRequest::new("/one"),
            BatchRequest::new("/two")
                .with_method("post")
                .with_json(json!({"x": 1})),
        ])
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["n"], 1);
    assert_eq!(results[1]["n"], 2);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn batch_aborts_on_first_failure() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/ok")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let failing = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body(r#"{"error": "not found"}"#)
        .expect(1)
        .create_async()
        .await;
    let never = server
        .mock("GET", "/never")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .batch(vec![
            BatchRequest::new("/ok"),
            BatchRequest::new("/missing"),
            BatchRequest::new("/never"),
        ])
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    first.assert_async().await;
    failing.assert_async().await;
    never.assert_async().await;
}

#[tokio::test]
async fn batch_entries_deserialize_from_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/organic/top-pages")
        .match_query(Matcher::UrlEncoded("target".into(), "a.com".into()))
        .with_status(200)
        .with_body(r#"{"pages": []}"#)
        .expect(1)
        .create_async()
        .await;

    let entries: Vec<BatchRequest> = serde_json::from_value(json!([
        {"path": "/organic/top-pages", "params": {"target": "a.com"}}
    ]))
    .unwrap();

    let client = client_for(&server.url());
    let results = client.batch(entries).await.unwrap();
    assert_json_eq!(results, json!([{"pages": []}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn base_url_trailing_slash_is_ignored() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/management/projects")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&format!("{}/", server.url()));
    client
        .get_category(Category::Management, "projects", Params::new())
        .await
        .unwrap();

    mock.assert_async().await;
}
