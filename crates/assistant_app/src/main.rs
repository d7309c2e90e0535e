use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use assistant_core::{popup_origin, ElementKind, Viewport, DEFAULT_POPUP_SIZE, GRACE_PERIOD};
use assistant_engine::MemoryDocument;

use assistant_app::platform;
use platform::events::DomEvent;
use platform::logging::{initialize, LogDestination};
use platform::session::Session;

/// Scripted walkthrough of the assistant over an in-memory document, so
/// the tracker and popup behavior can be exercised without a browser or a
/// network connection.
fn main() {
    initialize(LogDestination::Terminal);
    let settings = platform::settings::load(Path::new("."));

    let doc = Arc::new(MemoryDocument::new());
    doc.insert("tagline-en", ElementKind::TextInput, "my first tagline");
    doc.insert("tagline-fr", ElementKind::TextInput, "");
    doc.insert("tagline-ar", ElementKind::TextInput, "");
    doc.insert_popup("assistant-prompt", ElementKind::TextArea);

    let mut session = Session::new(doc.clone(), settings);
    let viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

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

    match session.view().popup {
        Some(popup) => {
            let origin = popup_origin(popup.anchor, DEFAULT_POPUP_SIZE, viewport);
            println!("popup visible at ({:.0}, {:.0})", origin.x, origin.y);
        }
        None => println!("popup hidden"),
    }

    // Clicking into the popup blurs the field but must not lose it.
    session.handle_dom_event(DomEvent::PointerDown {
        x: 335.0,
        y: 255.0,
        target: "assistant-prompt".to_string(),
    });
    session.handle_dom_event(DomEvent::FocusOut {
        target: "tagline-en".to_string(),
        related: Some("assistant-prompt".to_string()),
    });
    println!(
        "after popup click: popup {}",
        if session.view().popup.is_some() {
            "still visible"
        } else {
            "gone"
        }
    );

    // Leaving the form entirely clears the tracker after the grace window.
    session.handle_dom_event(DomEvent::FocusOut {
        target: "tagline-en".to_string(),
        related: None,
    });
    thread::sleep(GRACE_PERIOD + Duration::from_millis(100));
    session.pump();
    println!(
        "after grace period: popup {}",
        if session.view().popup.is_some() {
            "still visible"
        } else {
            "gone"
        }
    );
}
