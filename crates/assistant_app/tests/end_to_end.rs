use std::sync::{Arc, Once};
use std::time::{Duration, Instant};

use assistant_app::platform::events::DomEvent;
use assistant_app::platform::session::Session;
use assistant_app::platform::settings::{self, Settings};
use assistant_core::{ElementKind, NoticeKind, GRACE_PERIOD};
use assistant_engine::{Document, MemoryDocument};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(assistant_logging::initialize_for_tests);
}

fn admin_document() -> Arc<MemoryDocument> {
    let doc = Arc::new(MemoryDocument::new());
    doc.insert("tagline-en", ElementKind::TextInput, "my first tagline");
    doc.insert("tagline-fr", ElementKind::TextInput, "");
    doc.insert("tagline-ar", ElementKind::TextInput, "");
    doc.insert_popup("assistant-prompt", ElementKind::TextArea);
    doc
}

fn session_for(doc: Arc<MemoryDocument>, endpoint: String) -> Session {
    Session::new(
        doc,
        Settings {
            endpoint,
            ui_language: "en".to_string(),
        },
    )
}

/// Route to the admin area, record a click, and focus the tagline field.
fn focus_tagline(session: &mut Session) {
    session.handle_dom_event(DomEvent::RouteChanged {
        path: "/admin/projects/42".to_string(),
    });
    session.handle_dom_event(DomEvent::PointerDown {
        x: 320.0,
        y: 240.0,
        target: "tagline-en".to_string(),
    });
    session.handle_dom_event(DomEvent::FocusIn {
        target: "tagline-en".to_string(),
    });
}

/// Pumps the session until `done` reports true or the deadline passes.
async fn pump_until(session: &mut Session, mut done: impl FnMut(&Session) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(3);
    while !done(session) {
        assert!(
            Instant::now() < deadline,
            "timed out waiting for the session"
        );
        session.pump();
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn improve_fans_out_across_the_language_group() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai-text-helper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "en": "Better tagline",
                "fr": "Meilleur slogan",
                "ar": "شعار أفضل",
            },
        })))
        .mount(&server)
        .await;

    let doc = admin_document();
    let mut session = session_for(doc.clone(), format!("{}/ai-text-helper", server.uri()));
    focus_tagline(&mut session);

    // The click on Improve passes through the popup, blurring the field.
    session.handle_dom_event(DomEvent::PointerDown {
        x: 335.0,
        y: 255.0,
        target: "assistant-prompt".to_string(),
    });
    session.handle_dom_event(DomEvent::FocusOut {
        target: "tagline-en".to_string(),
        related: Some("assistant-prompt".to_string()),
    });
    session.improve();
    assert!(session.view().popup.expect("popup visible").busy);

    pump_until(&mut session, |session| {
        session.view().popup.is_some_and(|popup| !popup.busy)
    })
    .await;

    assert_eq!(doc.value("tagline-en").as_deref(), Some("Better tagline"));
    assert_eq!(doc.value("tagline-fr").as_deref(), Some("Meilleur slogan"));
    assert_eq!(doc.value("tagline-ar").as_deref(), Some("شعار أفضل"));
    // The edited field keeps focus for a follow-up improvement.
    assert_eq!(doc.focused().as_deref(), Some("tagline-en"));
    let notice = session.view().notice.expect("success notice");
    assert_eq!(notice.kind, NoticeKind::Success);
}

#[tokio::test(flavor = "multi_thread")]
async fn request_failure_leaves_the_field_untouched() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai-text-helper"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let doc = admin_document();
    let mut session = session_for(doc.clone(), format!("{}/ai-text-helper", server.uri()));
    focus_tagline(&mut session);
    session.improve();

    pump_until(&mut session, |session| session.view().notice.is_some()).await;

    assert_eq!(doc.value("tagline-en").as_deref(), Some("my first tagline"));
    let notice = session.view().notice.expect("error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[test]
fn public_pages_never_show_the_assistant() {
    init_logging();
    let doc = admin_document();
    let mut session = session_for(doc, "http://localhost:9/unused".to_string());

    session.handle_dom_event(DomEvent::RouteChanged {
        path: "/blog".to_string(),
    });
    session.handle_dom_event(DomEvent::PointerDown {
        x: 10.0,
        y: 10.0,
        target: "tagline-en".to_string(),
    });
    session.handle_dom_event(DomEvent::FocusIn {
        target: "tagline-en".to_string(),
    });

    assert!(session.view().popup.is_none());
}

#[test]
fn grace_expiry_clears_tracking_without_refocus() {
    init_logging();
    let doc = admin_document();
    let mut session = session_for(doc, "http://localhost:9/unused".to_string());
    focus_tagline(&mut session);

    session.handle_dom_event(DomEvent::FocusOut {
        target: "tagline-en".to_string(),
        related: None,
    });
    assert!(session.view().popup.is_some());

    std::thread::sleep(GRACE_PERIOD + Duration::from_millis(150));
    session.pump();

    assert!(session.view().popup.is_none());
}

#[test]
fn settings_default_when_the_file_is_missing() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let loaded = settings::load(dir.path());
    assert_eq!(loaded.ui_language, "en");
    assert!(!loaded.endpoint.is_empty());
}
