use gamedex_core::LlmConfig;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::LlmClient;
use crate::error::LlmError;
use crate::recognition::VisionModel;

fn completion(content: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [{
            "message": {
                "content": content,
                "role": "assistant"
            }
        }]
    }))
}

#[tokio::test]
async fn test_describe_image_returns_content() {
    let server = MockServer::start().await;
    let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o",
            "response_format": {"type": "json_object"}
        })))
        .respond_with(completion(serde_json::json!("{\"title\": \"Catan\"}")))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.describe_image("QUJD").await.unwrap();
    assert_eq!(result, "{\"title\": \"Catan\"}");
}

#[tokio::test]
async fn test_no_retry_on_server_error() {
    let server = MockServer::start().await;
    let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.describe_image("QUJD").await.unwrap_err();
    let err_msg = err.to_string();
    assert!(err_msg.contains("503"));
    assert!(err_msg.contains("Service Unavailable"));
    assert!(!err.is_configuration());
}

#[tokio::test]
async fn test_unauthorized_is_configuration_error() {
    let server = MockServer::start().await;
    let client = LlmClient::new("bad-key".to_owned(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.describe_image("QUJD").await.unwrap_err();
    assert!(matches!(err, LlmError::HttpStatus { code: 401, .. }));
    assert!(err.is_configuration());
}

#[tokio::test]
async fn test_null_content_is_empty_response() {
    let server = MockServer::start().await;
    let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion(serde_json::Value::Null))
        .mount(&server)
        .await;

    let err = client.describe_image("QUJD").await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn test_empty_choices_is_empty_response() {
    let server = MockServer::start().await;
    let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client.describe_image("QUJD").await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let err = client.describe_image("QUJD").await.unwrap_err();
    assert!(matches!(err, LlmError::JsonParse { .. }));
    assert!(err.to_string().contains("proxy error"));
}

#[tokio::test]
async fn test_blank_key_fails_before_network() {
    let server = MockServer::start().await;
    let client = LlmClient::new(String::new(), server.uri()).unwrap();

    Mock::given(method("POST"))
        .respond_with(completion(serde_json::json!("{}")))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.describe_image("QUJD").await.unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey));
}

#[test]
fn test_from_config_requires_key() {
    let err = LlmClient::from_config(&LlmConfig::default()).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey));

    let config = LlmConfig {
        api_key: Some("sk-test".to_owned()),
        base_url: "http://localhost:1/".to_owned(),
        model: "gpt-4o-mini".to_owned(),
        ..LlmConfig::default()
    };
    let client = LlmClient::from_config(&config).unwrap();
    assert_eq!(client.base_url(), "http://localhost:1");
    assert_eq!(client.model(), "gpt-4o-mini");
    assert!(!format!("{client:?}").contains("sk-test"));
}
