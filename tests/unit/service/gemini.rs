use super::*;

#[test]
fn endpoint_gets_model_path_and_key() {
    let url = resolve_endpoint("https://example.test/", "m-1", "secret").unwrap();
    assert_eq!(url.path(), "/v1beta/models/m-1:generateContent");
    assert!(url.query_pairs().any(|(k, v)| k == "key" && v == "secret"));
}

#[test]
fn full_endpoint_is_used_as_is() {
    let url = resolve_endpoint(
        "https://example.test/custom/m:generateContent?key=preset",
        "ignored",
        "secret",
    )
    .unwrap();
    assert_eq!(url.path(), "/custom/m:generateContent");
    let keys: Vec<_> = url
        .query_pairs()
        .filter(|(k, _)| k == "key")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(keys, vec!["preset".to_string()]);
}

#[test]
fn invalid_endpoint_is_a_network_error() {
    let err = resolve_endpoint("not a url", "m", "k").unwrap_err();
    assert!(matches!(err, ServiceError::Network(_)));
}

#[test]
fn candidate_parts_are_joined() {
    let body = json!({
        "candidates": [
            { "content": { "parts": [ { "text": "a" }, { "inlineData": {} }, { "text": "b" } ] } },
            { "content": { "parts": [ { "text": "ignored" } ] } }
        ]
    });
    assert_eq!(extract_candidate_text(&body).unwrap(), "a\nb");
}

#[test]
fn missing_candidates_are_malformed() {
    let err = extract_candidate_text(&json!({ "candidates": [] })).unwrap_err();
    assert!(matches!(err, ServiceError::Malformed(_)));
    let err = extract_candidate_text(&json!({ "candidates": [ { "content": {} } ] })).unwrap_err();
    assert!(matches!(err, ServiceError::Malformed(_)));
}

#[test]
fn truncate_marks_cut_bodies() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("abcdef", 3), "abc...");
}

#[tokio::test]
async fn missing_key_fails_before_any_io() {
    let service = GeminiTextService::new(ServiceConfig {
        endpoint: "http://127.0.0.1:9".to_string(),
        ..ServiceConfig::default()
    })
    .unwrap();
    let err = service.request_text("hello").await.unwrap_err();
    assert_eq!(err, ServiceError::MissingCredentials);
}
