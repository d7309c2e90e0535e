use std::collections::BTreeMap;
use std::time::Duration;

use assistant_core::{AssistantRequest, AssistantResult, ContextHint, ContextKind, Lang, Mode};
use assistant_engine::{AiClient, AiClientSettings, AiFailureKind, ReqwestAiClient};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn improve_request() -> AssistantRequest {
    AssistantRequest {
        mode: Mode::Improve,
        text: Some("my tagline".to_string()),
        prompt: None,
        context: Some(ContextHint {
            kind: ContextKind::Project,
            id: Some("42".to_string()),
        }),
    }
}

fn client_for(server: &MockServer) -> ReqwestAiClient {
    ReqwestAiClient::new(AiClientSettings::new(format!(
        "{}/ai-text-helper",
        server.uri()
    )))
}

#[tokio::test]
async fn improve_posts_the_wire_shape_and_parses_a_single_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai-text-helper"))
        .and(body_partial_json(serde_json::json!({
            "mode": "improve",
            "text": "my tagline",
            "context": { "type": "project", "id": "42" },
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": "Better" })),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).run(&improve_request()).await.unwrap();
    assert_eq!(result, AssistantResult::Single("Better".to_string()));
}

#[tokio::test]
async fn per_language_result_maps_every_provided_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai-text-helper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "en": "Better tagline", "fr": "Meilleur slogan", "ar": "شعار أفضل" },
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).run(&improve_request()).await.unwrap();
    let expected: BTreeMap<Lang, String> = [
        (Lang::En, "Better tagline".to_string()),
        (Lang::Fr, "Meilleur slogan".to_string()),
        (Lang::Ar, "شعار أفضل".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(result, AssistantResult::Multilingual(expected));
}

#[tokio::test]
async fn http_error_status_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai-text-helper"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).run(&improve_request()).await.unwrap_err();
    assert_eq!(err.kind, AiFailureKind::HttpStatus(500));
}

#[tokio::test]
async fn error_field_on_success_status_is_a_service_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai-text-helper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "quota exceeded",
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).run(&improve_request()).await.unwrap_err();
    assert_eq!(err.kind, AiFailureKind::Service);
    assert_eq!(err.message, "quota exceeded");
}

#[tokio::test]
async fn empty_payload_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai-text-helper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server).run(&improve_request()).await.unwrap_err();
    assert_eq!(err.kind, AiFailureKind::MalformedPayload);
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai-text-helper"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "result": "slow" })),
        )
        .mount(&server)
        .await;

    let mut settings = AiClientSettings::new(format!("{}/ai-text-helper", server.uri()));
    settings.request_timeout = Duration::from_millis(50);
    let err = ReqwestAiClient::new(settings)
        .run(&improve_request())
        .await
        .unwrap_err();
    assert_eq!(err.kind, AiFailureKind::Timeout);
}
