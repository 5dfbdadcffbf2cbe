//! Loader and scheduler tests against a mock HTTP server.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::Instant;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prospectus_client::ApiClient;
use prospectus_config::SiteConfig;
use prospectus_content::{
    LoaderContext, LoaderDescriptor, PageModel, default_plan, load_section, run_schedule,
};
use prospectus_types::{Section, SectionUpdate};

fn test_client(server: &MockServer) -> ApiClient {
    let mut config = SiteConfig::default();
    config.base_url = server.uri().parse().expect("mock server uri");
    config.fetch.timeout_ms = 1_000;
    config.fetch.retry_attempts = 0;
    config.fetch.retry_backoff_ms = 1;
    config.schedule.medium_delay_ms = 40;
    config.schedule.low_delay_ms = 100;
    ApiClient::new(Arc::new(config)).expect("client builds")
}

/// Run one loader and return every update it emitted.
async fn run_loader(
    server: &MockServer,
    page: PageModel,
    descriptor: LoaderDescriptor,
) -> Vec<SectionUpdate> {
    let (tx, mut rx) = mpsc::channel(16);
    let ctx = LoaderContext::new(test_client(server), page, tx);
    load_section(&ctx, &descriptor).await;
    drop(ctx);

    let mut events = Vec::new();
    while let Some(update) = rx.recv().await {
        events.push(update);
    }
    events
}

#[tokio::test]
async fn requirements_load_shows_placeholder_then_renders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admissions/requirements"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "requirements": ["BECE results slip", "Two passport photos"]
        })))
        .mount(&server)
        .await;

    let page = PageModel::new().with_container("admission-requirements");
    let events = run_loader(
        &server,
        page,
        LoaderDescriptor::new(Section::AdmissionRequirements),
    )
    .await;

    match events.as_slice() {
        [
            SectionUpdate::Loading { message, .. },
            SectionUpdate::Rendered { container, html },
        ] => {
            assert_eq!(message, "Loading admission requirements...");
            assert_eq!(container, "admission-requirements");
            assert_eq!(
                html,
                "<ul><li>BECE results slip</li><li>Two passport photos</li></ul>"
            );
        }
        other => panic!("unexpected events: {other:?}"),
    }
}

#[tokio::test]
async fn empty_requirements_array_fails_instead_of_rendering_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admissions/requirements"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"requirements": []})))
        .mount(&server)
        .await;

    let page = PageModel::new().with_container("admission-requirements");
    let events = run_loader(
        &server,
        page,
        LoaderDescriptor::new(Section::AdmissionRequirements),
    )
    .await;

    match events.last() {
        Some(SectionUpdate::Failed {
            section, message, ..
        }) => {
            assert_eq!(*section, Section::AdmissionRequirements);
            assert_eq!(
                message,
                "Unable to load admission requirements. Please refresh the page."
            );
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, SectionUpdate::Rendered { .. })),
        "an empty list must never render"
    );
}

#[tokio::test]
async fn absent_container_emits_nothing() {
    let server = MockServer::start().await;
    // No page container, so the endpoint must never even be hit.
    let events = run_loader(
        &server,
        PageModel::new(),
        LoaderDescriptor::new(Section::VisitingHours),
    )
    .await;
    assert!(events.is_empty());
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 0);
}

#[tokio::test]
async fn fallback_section_fails_open_on_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/footer-contact"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let page = PageModel::new().with_fallback_container("footer-contact-info");
    let events = run_loader(&server, page, LoaderDescriptor::new(Section::FooterContact)).await;

    // No loading placeholder over fallback content, no retry state either.
    assert_eq!(
        events,
        vec![SectionUpdate::FallbackRetained {
            container: "footer-contact-info".to_string()
        }]
    );
}

#[tokio::test]
async fn fallback_section_still_updates_on_api_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/footer-contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "footerContact": {"email": "office@shs.edu", "phone": "030 123 4567"}
        })))
        .mount(&server)
        .await;

    let page = PageModel::new().with_fallback_container("footer-contact-info");
    let events = run_loader(&server, page, LoaderDescriptor::new(Section::FooterContact)).await;

    match events.as_slice() {
        [SectionUpdate::Rendered { html, .. }] => {
            assert!(html.contains("<p>Email: office@shs.edu</p>"));
            assert!(html.contains("<p>Phone: 030 123 4567</p>"));
        }
        other => panic!("expected a single Rendered event, got {other:?}"),
    }
}

#[tokio::test]
async fn quick_contact_always_appends_the_apply_tile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/quick-contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "quickContacts": [
                {"link": "tel:0301234567", "title": "Call Us", "description": "Front office"}
            ]
        })))
        .mount(&server)
        .await;

    let page = PageModel::new().with_container("quick-contact-grid");
    let events = run_loader(&server, page, LoaderDescriptor::new(Section::QuickContact)).await;

    let html = events
        .iter()
        .find_map(|e| match e {
            SectionUpdate::Rendered { html, .. } => Some(html),
            _ => None,
        })
        .expect("rendered event");
    let call = html.find("Call Us").expect("api tile");
    let apply = html.find("Apply for Admission").expect("static tile");
    assert!(call < apply, "api items render before the static tile");
}

#[tokio::test]
async fn malicious_payload_text_is_escaped_in_the_fragment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contacts": [{"title": "<script>alert(1)</script>", "description": "x"}]
        })))
        .mount(&server)
        .await;

    let page = PageModel::new().with_container("contact-info-grid");
    let events = run_loader(&server, page, LoaderDescriptor::new(Section::Contacts)).await;

    let html = events
        .iter()
        .find_map(|e| match e {
            SectionUpdate::Rendered { html, .. } => Some(html),
            _ => None,
        })
        .expect("rendered event");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

/// Successful bodies for every section endpoint.
fn section_bodies() -> Vec<(&'static str, serde_json::Value)> {
    vec![
        ("/api/admissions/requirements", json!({"requirements": ["r"]})),
        ("/api/admissions/process", json!({"steps": ["s"]})),
        ("/api/admissions/dates", json!({"dates": [{"title": "t", "date": "d"}]})),
        ("/api/contacts", json!({"contacts": [{"title": "c"}]})),
        ("/api/visiting-hours", json!({"hours": [{"day": "Mon", "time": "8am"}]})),
        ("/api/quick-contact", json!({"quickContacts": [{"link": "l", "title": "t", "description": "d"}]})),
        ("/api/footer-contact", json!({"footerContact": {"email": "e@x.co"}})),
    ]
}

/// Mounts a successful mock for every section endpoint except `skip`.
async fn mount_sections_except(server: &MockServer, skip: &[&str]) {
    for (endpoint, body) in section_bodies() {
        if skip.contains(&endpoint) {
            continue;
        }
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }
}

fn full_page() -> PageModel {
    PageModel::new()
        .with_container("admission-requirements")
        .with_container("application-process")
        .with_container("important-dates")
        .with_container("admissions-contact-grid")
        .with_container("contact-info-grid")
        .with_container("visiting-hours")
        .with_container("quick-contact-grid")
        .with_container("footer-contact-info")
}

#[tokio::test]
async fn low_tier_never_starts_before_the_scheduled_delays() {
    let server = MockServer::start().await;
    mount_sections_except(&server, &[]).await;

    let (tx, mut rx) = mpsc::channel(64);
    let collector = tokio::spawn(async move {
        let mut events = Vec::new();
        while let Some(update) = rx.recv().await {
            events.push((Instant::now(), update));
        }
        events
    });

    let ctx = LoaderContext::new(test_client(&server), full_page(), tx);
    let start = Instant::now();
    run_schedule(&ctx, &default_plan()).await;
    drop(ctx);
    let events = collector.await.expect("collector");

    let first_for = |container: &str| {
        events
            .iter()
            .find(|(_, update)| update.container() == container)
            .map(|(at, _)| *at - start)
            .unwrap_or_else(|| panic!("no event for {container}"))
    };

    // Medium tier (40 ms) and low tier (100 ms) honor their offsets.
    assert!(first_for("visiting-hours") >= Duration::from_millis(40));
    assert!(first_for("footer-contact-info") >= Duration::from_millis(100));
    // High tier starts without waiting on either delay.
    assert!(first_for("admission-requirements") < first_for("footer-contact-info"));
}

#[tokio::test]
async fn a_failing_loader_does_not_block_tier_siblings() {
    let server = MockServer::start().await;
    // Requirements gets a server error; it shares the high tier with
    // process, dates and the contact grid.
    mount_sections_except(&server, &["/api/admissions/requirements"]).await;
    Mock::given(method("GET"))
        .and(path("/api/admissions/requirements"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (tx, mut rx) = mpsc::channel(64);
    let ctx = LoaderContext::new(test_client(&server), full_page(), tx);
    run_schedule(&ctx, &default_plan()).await;
    drop(ctx);

    let mut events = Vec::new();
    while let Some(update) = rx.recv().await {
        events.push(update);
    }

    assert!(events.iter().any(|e| matches!(
        e,
        SectionUpdate::Failed { container, .. } if container == "admission-requirements"
    )));
    for sibling in ["application-process", "important-dates", "contact-info-grid"] {
        assert!(
            events.iter().any(|e| matches!(
                e,
                SectionUpdate::Rendered { container, .. } if container == sibling
            )),
            "{sibling} should render despite the failing sibling"
        );
    }
}
