use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use contact_relay::{
    config::MailConfig, create_app, create_app_with_config, AppConfig, AppState, MemoryMailer,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn configured() -> AppConfig {
    AppConfig {
        mail: MailConfig {
            sender: Some("ops@example.com".to_string()),
            secret: Some("app-password".to_string()),
            ..MailConfig::default()
        },
        ..AppConfig::default()
    }
}

fn setup_app(config: &AppConfig, mailer: &MemoryMailer) -> Router {
    let state = AppState::new(config, Arc::new(mailer.clone()));
    create_app_with_config(state, config)
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/send-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_successful_relay() {
    let mailer = MemoryMailer::succeeding("250 OK");
    let app = setup_app(&configured(), &mailer);

    let (status, body) = send(
        &app,
        post_json(json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Email sent successfully");
    assert_eq!(body["response"], "250 OK");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, "ops@example.com");
    assert_eq!(sent[0].to, "ops@example.com");
    assert!(sent[0].subject.contains("Ada"));
    assert!(sent[0].body.contains("Ada"));
    assert!(sent[0].body.contains("ada@example.com"));
    assert!(sent[0].body.contains("Hello"));
}

#[tokio::test]
async fn test_message_content_is_relayed_verbatim() {
    let mailer = MemoryMailer::default();
    let app = setup_app(&configured(), &mailer);
    let message = "Line one\nLine two with ünïcödé & <markup>";

    let (status, _) = send(
        &app,
        post_json(json!({"name": "Grace Hopper", "email": "grace@navy.mil", "message": message})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let sent = mailer.sent();
    assert!(sent[0].body.contains("Grace Hopper"));
    assert!(sent[0].body.contains("grace@navy.mil"));
    assert!(sent[0].body.contains(message));
}

#[tokio::test]
async fn test_missing_fields_are_rejected_without_sending() {
    let mailer = MemoryMailer::default();
    let app = setup_app(&configured(), &mailer);

    let bodies = [
        json!({"name": "", "email": "a@b.com", "message": "hi"}),
        json!({"email": "a@b.com", "message": "hi"}),
        json!({"name": "Ada", "message": "hi"}),
        json!({"name": "Ada", "email": "", "message": "hi"}),
        json!({"name": "Ada", "email": "a@b.com"}),
        json!({"name": "Ada", "email": "a@b.com", "message": ""}),
        json!({}),
    ];

    for body in bodies {
        let (status, response) = send(&app, post_json(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response, json!({"error": "Missing required fields"}));
    }

    assert_eq!(mailer.send_count(), 0);
}

#[tokio::test]
async fn test_unconfigured_service_returns_500() {
    let mailer = MemoryMailer::default();
    let app = setup_app(&AppConfig::default(), &mailer);

    let (status, body) = send(
        &app,
        post_json(json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Email service not configured"}));
    assert_eq!(mailer.send_count(), 0);
}

#[tokio::test]
async fn test_validation_runs_before_configuration_check() {
    let mailer = MemoryMailer::default();
    let app = setup_app(&AppConfig::default(), &mailer);

    let (status, _) = send(&app, post_json(json!({"name": "Ada"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transport_failure_returns_500_and_server_keeps_serving() {
    let mailer = MemoryMailer::failing("535 5.7.8 Username and Password not accepted");
    let app = setup_app(&configured(), &mailer);

    let (status, body) = send(
        &app,
        post_json(json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to send email");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("Username and Password not accepted"));

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_malformed_json_is_a_bad_request() {
    let mailer = MemoryMailer::default();
    let app = setup_app(&configured(), &mailer);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/send-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"Ada\""))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON body");
    assert_eq!(mailer.send_count(), 0);
}

#[tokio::test]
async fn test_probes_always_succeed() {
    let mailer = MemoryMailer::failing("down");
    let app = setup_app(&AppConfig::default(), &mailer);

    let _ = send(
        &app,
        post_json(json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})),
    )
    .await;

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Server is working!"}));

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send(&app, get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Test successful"}));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = create_app(AppState::new(
        &AppConfig::default(),
        Arc::new(MemoryMailer::default()),
    ));

    let (status, body) = send(&app, get("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
    assert_eq!(body["details"], "/nope");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = setup_app(&configured(), &MemoryMailer::default());

    let response = app.oneshot(get("/health")).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_cors_preflight_for_send_email() {
    let app = setup_app(&configured(), &MemoryMailer::default());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/send-email")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_concurrent_submissions_are_independent() {
    let mailer = MemoryMailer::default();
    let app = setup_app(&configured(), &mailer);

    let mut handles = Vec::new();
    for i in 0..10 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            send(
                &app,
                post_json(json!({
                    "name": format!("User {}", i),
                    "email": format!("user{}@example.com", i),
                    "message": "hi",
                })),
            )
            .await
            .0
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
    assert_eq!(mailer.send_count(), 10);
}
