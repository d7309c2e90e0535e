use assistant_core::{ElementRef, Msg, PointerPosition};
use assistant_engine::Document;

/// Raw document-level events delivered by the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum DomEvent {
    FocusIn {
        target: String,
    },
    FocusOut {
        target: String,
        /// The element receiving focus next, when the host reports one.
        related: Option<String>,
    },
    PointerDown {
        x: f64,
        y: f64,
        target: String,
    },
    RouteChanged {
        path: String,
    },
}

/// Thin adapter from raw DOM events to core messages.
///
/// Classification happens here so the state machine stays free of DOM
/// lookups: eligibility is "the document knows this id as an editable
/// element", and anything targeting the popup's interior is flagged so it
/// never reaches the abandonment paths.
pub fn map_dom_event(doc: &dyn Document, event: DomEvent) -> Option<Msg> {
    match event {
        DomEvent::FocusIn { target } => {
            if doc.in_popup(&target) {
                return None;
            }
            let kind = doc.kind(&target)?;
            Some(Msg::FocusGained {
                element: ElementRef::new(target, kind),
            })
        }
        DomEvent::FocusOut { target, related } => {
            let into_popup = related.as_deref().is_some_and(|id| doc.in_popup(id));
            Some(Msg::FocusLost {
                element_id: target,
                into_popup,
            })
        }
        DomEvent::PointerDown { x, y, target } => {
            let in_popup = doc.in_popup(&target);
            let on_eligible = !in_popup && doc.kind(&target).is_some();
            Some(Msg::PointerDown {
                position: PointerPosition { x, y },
                in_popup,
                on_eligible,
            })
        }
        DomEvent::RouteChanged { path } => Some(Msg::RouteChanged(path)),
    }
}
