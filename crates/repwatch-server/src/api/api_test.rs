use super::*;
use axum::body::{to_bytes, Body};
use repwatch_analysis::AnalysisConfig;
use std::time::Duration;
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState {
        processor: Arc::new(BatchProcessor::new(AnalysisConfig::default(), None)),
    }
}

fn test_app() -> Router {
    build_app(
        test_state(),
        AuthState::disabled(),
        RateLimitState::new(100, Duration::from_secs(60)),
    )
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}

const SAMPLE_BATCH: &str = r#"{
    "brand": "Acme",
    "mentions": [
        {"id": "1", "platform": "twitter", "author": "@a", "text": "Love the new update — great work!"},
        {"id": "2", "platform": "twitter", "author": "@b", "text": "Delayed delivery, very upset"},
        {"id": "3", "platform": "reddit", "text": "Product is okay, nothing special."},
        {"id": "4", "platform": "reddit", "text": "Really bad experience, broken on arrival."},
        {"id": "5", "text": "Amazing battery life!"}
    ]
}"#;

#[test]
fn api_error_validation_error_maps_to_bad_request() {
    let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn api_error_unknown_code_maps_to_internal_error() {
    let response = ApiError::new("req-1", "internal_error", "boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn panic_handler_returns_generic_500() {
    let response = handle_panic(Box::new("secret detail".to_string()));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn request_span_records_request_id_field() {
    let mut req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    req.extensions_mut().insert(RequestId("req-span".to_string()));
    let span = request_span(&req);
    let meta = span.metadata().expect("span metadata");
    assert_eq!(meta.name(), "http_request");
    assert!(meta.fields().field("request_id").is_some());
}

#[tokio::test]
async fn handler_panic_returns_500_with_request_id_header() {
    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    let app = with_http_layers(Router::new().route("/boom", get(boom))).with_state(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/boom")
                .header("x-request-id", "req-panic")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()["x-request-id"], "req-panic");
    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "internal server error");
}

#[tokio::test]
async fn health_returns_fixed_status() {
    for uri in ["/health", "/api/v1/health"] {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["component"], "repwatch");
    }
}

#[tokio::test]
async fn request_id_is_propagated() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-abc");
}

#[tokio::test]
async fn process_batch_returns_summary_and_drafts() {
    let response = test_app()
        .oneshot(post_json("/process_batch", SAMPLE_BATCH))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json.get("message").is_none());
    let data = &json["data"];
    assert_eq!(data["summary"]["total_mentions"], 5);
    assert_eq!(data["summary"]["positive"], 2);
    assert_eq!(data["summary"]["negative"], 2);
    assert_eq!(data["summary"]["neutral"], 1);
    assert_eq!(data["reputation_score"], 50.0);
    assert_eq!(data["suggested_responses"].as_array().unwrap().len(), 2);
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn versioned_route_is_equivalent() {
    let response = test_app()
        .oneshot(post_json("/api/v1/process_batch", SAMPLE_BATCH))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_mentions_returns_no_data_envelope() {
    let response = test_app()
        .oneshot(post_json("/process_batch", r#"{"mentions": []}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "no mentions provided");
    assert_eq!(json["data"], serde_json::json!({}));
}

#[tokio::test]
async fn all_blank_mentions_is_validation_error() {
    let response = test_app()
        .oneshot(post_json(
            "/process_batch",
            r#"{"mentions": [{"text": "  "}, {"text": ""}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn out_of_range_baseline_skips_spike_rule() {
    let response = test_app()
        .oneshot(post_json(
            "/process_batch",
            r#"{"mentions": [{"text": "great phone"}, {"text": "terrible delivery"}], "historical_negative_ratio": 1.2, "historical_window_size": 100}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["data"]["summary"]["total_mentions"], 2);
    assert_eq!(json["data"]["alerts"], serde_json::json!([]));
    assert_eq!(json["data"]["suggested_responses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_body_is_bad_request_json() {
    let response = test_app()
        .oneshot(post_json("/process_batch", r#"{"mentions": "nope"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn spike_alert_reaches_response() {
    let body = serde_json::json!({
        "mentions": [
            {"text": "terrible, broken again"},
            {"text": "great phone"},
            {"text": "great battery"},
            {"text": "love it"},
            {"text": "arrived on tuesday"}
        ],
        "historical_negative_ratio": 0.0,
        "historical_window_size": 100
    });
    let response = test_app()
        .oneshot(post_json("/process_batch", &body.to_string()))
        .await
        .unwrap();
    let json = json_body(response).await;
    let alerts = json["data"]["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["kind"], "negative_spike");
    assert!(alerts[0]["fold_change"].is_null());
}

#[tokio::test]
async fn protected_route_requires_bearer_when_enabled() {
    let app = build_app(
        test_state(),
        AuthState::from_raw("secret", false).unwrap(),
        RateLimitState::new(100, Duration::from_secs(60)),
    );

    let response = app
        .clone()
        .oneshot(post_json("/process_batch", SAMPLE_BATCH))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let mut authed = post_json("/process_batch", SAMPLE_BATCH);
    authed
        .headers_mut()
        .insert("authorization", "Bearer secret".parse().unwrap());
    let response = app.clone().oneshot(authed).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
}

#[tokio::test]
async fn rate_limit_rejects_excess_requests() {
    let app = build_app(
        test_state(),
        AuthState::disabled(),
        RateLimitState::new(1, Duration::from_secs(60)),
    );
    let first = app
        .clone()
        .oneshot(post_json("/process_batch", r#"{"mentions": []}"#))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let second = app
        .oneshot(post_json("/process_batch", r#"{"mentions": []}"#))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = json_body(second).await;
    assert_eq!(json["error"]["code"], "rate_limited");
}
