use serde_json::json;
use spin_dcd_converter::core::client::{ApiSettings, ClientError, PipelineConfigClient};
use spin_dcd_converter::core::error::AppError;
use spin_dcd_converter::core::types::ErrorCategory;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONFIG_PATH: &str = "/applications/checkout/pipelineConfigs/3f1c2a9e";

#[tokio::test]
async fn fetch_returns_the_pipeline_document() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"name":"Deploy","lastModifiedBy":"ops","zeta":1,"alpha":2}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let settings = ApiSettings::new(format!("{}/", mock_server.uri()), None);
    let client = PipelineConfigClient::new(settings);
    let document = client.fetch("checkout", "3f1c2a9e").await.expect("fetch");

    assert_eq!(document["name"], "Deploy");
    let keys: Vec<&str> = document
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["name", "lastModifiedBy", "zeta", "alpha"]);
}

#[tokio::test]
async fn fetch_sends_session_cookie() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .and(header("cookie", "SESSION=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "stages": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let settings = ApiSettings::new(mock_server.uri(), Some("abc123".to_string()));
    let client = PipelineConfigClient::new(settings);
    let document = client.fetch("checkout", "3f1c2a9e").await.expect("fetch");
    assert_eq!(document, json!({ "stages": [] }));
}

#[tokio::test]
async fn non_200_status_is_a_fetch_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = PipelineConfigClient::new(ApiSettings::new(mock_server.uri(), None));
    let err = client
        .fetch("checkout", "3f1c2a9e")
        .await
        .expect_err("404 should fail");
    assert!(matches!(err, ClientError::Status(404)));

    let app_error: AppError = err.into();
    assert_eq!(app_error.category, ErrorCategory::FetchFailure);
    assert_eq!(app_error.message, "failed getting pipeline config: 404");
}

#[tokio::test]
async fn other_success_statuses_are_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = PipelineConfigClient::new(ApiSettings::new(mock_server.uri(), None));
    let err = client.fetch("checkout", "3f1c2a9e").await.expect_err("204");
    assert!(matches!(err, ClientError::Status(204)));
}

#[tokio::test]
async fn invalid_json_body_is_a_shape_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let client = PipelineConfigClient::new(ApiSettings::new(mock_server.uri(), None));
    let err = client.fetch("checkout", "3f1c2a9e").await.expect_err("html");
    let app_error: AppError = err.into();
    assert_eq!(app_error.category, ErrorCategory::InvalidDocumentShape);
}

#[tokio::test]
async fn unreachable_host_is_a_fetch_failure() {
    let client = PipelineConfigClient::new(ApiSettings::new("http://127.0.0.1:1", None));
    let err = client.fetch("checkout", "3f1c2a9e").await.expect_err("refused");
    assert!(matches!(err, ClientError::NetworkError(_)));
    let app_error: AppError = err.into();
    assert_eq!(app_error.category, ErrorCategory::FetchFailure);
}
