use crate::common::params;
use ahrefs_client::model::requests::{merge_params, take_path_override, to_query_pairs};
use ahrefs_client::prelude::*;

#[test]
fn request_spec_builders() {
    let spec = RequestSpec::put("/management/keywords").with_body(json!({"keywords": []}));
    assert_eq!(spec.method, Method::PUT);
    assert_eq!(spec.path, "/management/keywords");
    assert!(spec.query.is_empty());
    assert_eq!(spec.body, Some(json!({"keywords": []})));
}

#[test]
fn category_path_override_round() {
    let mut query = params(json!({"target": "a.com", "path": "/v2/custom"}));
    let path = take_path_override(&mut query, Category::Organic.path("competitors"));
    assert_eq!(path, "/v2/custom");
    assert_eq!(to_query_pairs(&query), vec![("target".to_string(), "a.com".to_string())]);
}

#[test]
fn missing_override_keeps_default_path() {
    let mut query = params(json!({"target": "a.com"}));
    let path = take_path_override(&mut query, Category::Organic.path("competitors"));
    assert_eq!(path, "/organic/competitors");
}

#[test]
fn extras_merge_last() {
    let merged = merge_params(
        params(json!({"target": "a.com", "limit": 100, "offset": 0})),
        params(json!({"limit": 10})),
    );
    assert_eq!(merged, params(json!({"target": "a.com", "limit": 10, "offset": 0})));
}

#[test]
fn batch_request_serde_shape() {
    let entry = BatchRequest::new("/serp/overview")
        .with_method("GET")
        .with_params(params(json!({"query": "rust"})));
    let value = serde_json::to_value(&entry).unwrap();
    let back: BatchRequest = serde_json::from_value(value).unwrap();
    assert_eq!(back, entry);
}
