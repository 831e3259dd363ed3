//! Integration tests for `OpenAiGenerator` using wiremock HTTP mocks.

use std::sync::Arc;
use std::time::Duration;

use repwatch_analysis::drafter::{DrafterConfig, ResponseDrafter};
use repwatch_analysis::{DraftSource, GenerationError, OpenAiGenerator, TextGenerator};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_generator(base_url: &str) -> OpenAiGenerator {
    OpenAiGenerator::with_base_url("test-key", "gpt-4o-mini", Duration::from_secs(5), base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn draft_posts_chat_request_and_returns_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o-mini",
            "max_tokens": 120
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": " We're on it. " } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = test_generator(&format!("{}/v1", server.uri()));
    let text = generator
        .draft("A user wrote: \"late again\"")
        .await
        .expect("should return text");
    assert_eq!(text, "We're on it.");
}

#[tokio::test]
async fn legacy_text_shape_is_accepted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [ { "text": "Please DM us." } ]
        })))
        .mount(&server)
        .await;

    let text = test_generator(&server.uri())
        .draft("prompt")
        .await
        .expect("should return text");
    assert_eq!(text, "Please DM us.");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = test_generator(&server.uri())
        .draft("prompt")
        .await
        .unwrap_err();
    match err {
        GenerationError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "slow down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_choices_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = test_generator(&server.uri())
        .draft("prompt")
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn drafter_falls_back_when_upstream_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let drafter = ResponseDrafter::new(
        DrafterConfig::default(),
        Some(Arc::new(test_generator(&server.uri()))),
    );
    let (text, source) = drafter.draft(Some("Acme"), "broken on arrival", None).await;
    assert_eq!(source, DraftSource::Template);
    assert!(text.contains("reach out at support@example.com"));
    assert!(text.contains("broken on arrival"));
}

#[tokio::test]
async fn drafter_falls_back_when_upstream_is_slow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_json(serde_json::json!({
                    "choices": [ { "message": { "content": "too late" } } ]
                })),
        )
        .mount(&server)
        .await;

    let drafter = ResponseDrafter::new(
        DrafterConfig {
            timeout: Duration::from_millis(200),
            ..DrafterConfig::default()
        },
        Some(Arc::new(test_generator(&server.uri()))),
    );
    let (_, source) = drafter.draft(None, "still waiting on my refund", None).await;
    assert_eq!(source, DraftSource::Template);
}
