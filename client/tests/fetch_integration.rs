//! End-to-end fetch layer tests against a mock HTTP server.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use prospectus_client::{ApiClient, FetchError};
use prospectus_config::SiteConfig;
use prospectus_types::{FormKind, Section};

/// Config pointing at the mock server, with fast timeouts for tests.
fn test_config(server: &MockServer, timeout_ms: u64, retries: u32) -> Arc<SiteConfig> {
    let mut config = SiteConfig::default();
    config.base_url = server.uri().parse().expect("mock server uri");
    config.fetch.timeout_ms = timeout_ms;
    config.fetch.retry_attempts = retries;
    config.fetch.retry_backoff_ms = 10;
    Arc::new(config)
}

fn client(server: &MockServer, timeout_ms: u64, retries: u32) -> ApiClient {
    ApiClient::new(test_config(server, timeout_ms, retries)).expect("client builds")
}

fn json_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

#[tokio::test]
async fn success_returns_the_payload_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/visiting-hours"))
        .respond_with(json_response(json!({"hours": [{"day": "Monday", "time": "8am"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 1_000, 2);
    let value = client
        .get_json(Section::VisitingHours)
        .await
        .expect("payload");
    assert!(value.get("hours").is_some_and(serde_json::Value::is_array));
}

#[tokio::test]
async fn sends_json_and_csrf_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .and(header("Accept", "application/json"))
        .and(header("X-CSRFToken", "tok-9"))
        .respond_with(json_response(json!({"contacts": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = SiteConfig::default();
    config.base_url = server.uri().parse().expect("uri");
    config.csrf_token = Some("tok-9".to_string());
    let client = ApiClient::new(Arc::new(config)).expect("client builds");

    client.get_json(Section::Contacts).await.expect("payload");
}

#[tokio::test]
async fn status_error_prefers_the_body_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Contacts moved"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 1_000, 2);
    match client.get_json(Section::Contacts).await {
        Err(FetchError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Contacts moved");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn status_error_falls_back_to_the_table_and_does_not_retry() {
    let server = MockServer::start().await;
    // expect(1): a 500 with a resolved message must propagate immediately.
    Mock::given(method("GET"))
        .and(path("/api/admissions/requirements"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 1_000, 2);
    match client.get_json(Section::AdmissionRequirements).await {
        Err(FetchError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Server error. Please try again later.");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_content_type_is_a_format_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/visiting-hours"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client(&server, 1_000, 2);
    match client.get_json(Section::VisitingHours).await {
        Err(FetchError::Format { detail }) => assert!(detail.contains("application/json")),
        other => panic!("expected Format error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_object_body_is_a_format_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/visiting-hours"))
        .respond_with(json_response(json!(["not", "an", "object"])))
        .mount(&server)
        .await;

    let client = client(&server, 1_000, 2);
    match client.get_json(Section::VisitingHours).await {
        Err(FetchError::Format { detail }) => assert!(detail.contains("object")),
        other => panic!("expected Format error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out_after_the_configured_duration() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/footer-contact"))
        .respond_with(
            json_response(json!({"footerContact": {}})).set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    // No retries so the elapsed time reflects a single deadline.
    let client = client(&server, 150, 0);
    let started = Instant::now();
    let result = client.get_json(Section::FooterContact).await;
    let elapsed = started.elapsed();

    match result {
        Err(FetchError::Timeout { timeout }) => {
            assert_eq!(timeout, Duration::from_millis(150));
        }
        other => panic!("expected Timeout error, got {other:?}"),
    }
    assert!(elapsed >= Duration::from_millis(150), "fired early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(1_500), "fired late: {elapsed:?}");
}

#[tokio::test]
async fn two_timeouts_then_success_resolves_within_the_retry_budget() {
    let server = MockServer::start().await;
    let attempts = AtomicU32::new(0);

    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(move |_: &Request| {
            let n = attempts.fetch_add(1, Ordering::SeqCst);
            if n < 2 {
                // Slower than the client deadline: attempts 1 and 2 time out.
                json_response(json!({"contacts": [{"title": "late"}]}))
                    .set_delay(Duration::from_secs(2))
            } else {
                json_response(json!({"contacts": [{"title": "Front Office"}]}))
            }
        })
        .expect(3)
        .mount(&server)
        .await;

    let client = client(&server, 100, 2);
    let value = client.get_json(Section::Contacts).await.expect("third attempt succeeds");
    assert_eq!(value["contacts"][0]["title"], "Front Office");
}

#[tokio::test]
async fn retry_budget_exhausts_into_a_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(json_response(json!({"contacts": []})).set_delay(Duration::from_secs(2)))
        .expect(3)
        .mount(&server)
        .await;

    let client = client(&server, 80, 2);
    match client.get_json(Section::Contacts).await {
        Err(FetchError::Timeout { .. }) => {}
        other => panic!("expected Timeout error, got {other:?}"),
    }
}

#[tokio::test]
async fn form_submission_posts_multipart_and_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(move |req: &Request| {
            let content_type = req
                .headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            assert!(
                content_type.starts_with("multipart/form-data"),
                "unexpected content type: {content_type}"
            );
            let body = String::from_utf8_lossy(&req.body);
            assert!(body.contains("contactName"));
            assert!(body.contains("Ama Mensah"));
            ResponseTemplate::new(200).set_body_json(json!({"status": "ok"}))
        })
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 1_000, 2);
    let fields = vec![
        ("contactName".to_string(), "Ama Mensah".to_string()),
        ("message".to_string(), "When do visits start?".to_string()),
    ];
    client
        .submit_form(FormKind::Contact, &fields)
        .await
        .expect("submission accepted");
}

#[tokio::test]
async fn form_submission_failure_carries_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admissions"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "Admissions are closed"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 1_000, 2);
    match client.submit_form(FormKind::Admission, &[]).await {
        Err(FetchError::Status { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "Admissions are closed");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn form_submission_failure_without_body_uses_the_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shs1-admissions"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, 1_000, 2);
    match client.submit_form(FormKind::Shs1Admission, &[]).await {
        Err(FetchError::Status { message, .. }) => {
            assert_eq!(message, FormKind::Shs1Admission.failure_message());
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
