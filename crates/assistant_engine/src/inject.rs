use std::collections::BTreeMap;

use assistant_core::{sibling_id, split_lang_suffix, AssistantResult, ElementKind, Lang};
use assistant_logging::{assistant_debug, assistant_warn};

use crate::document::Document;

/// What a single injection attempt did. Problems are reported, never
/// raised: the routine is designed to be safe to call speculatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    Applied,
    /// No element with that identifier exists (stale timer, out-of-order
    /// completion, missing sibling).
    MissingElement,
    /// The resolved target is part of the popup itself.
    InsidePopup,
}

/// Writes `text` into the element named `id` the way the host framework
/// observes, then restores focus to it.
pub fn inject_value(doc: &dyn Document, id: &str, text: &str) -> InjectOutcome {
    let Some(kind) = doc.kind(id) else {
        assistant_warn!("inject: no trackable element named '{}'", id);
        return InjectOutcome::MissingElement;
    };
    if doc.in_popup(id) {
        // Never overwrite the popup's own prompt box.
        assistant_warn!("inject: refusing to write into popup element '{}'", id);
        return InjectOutcome::InsidePopup;
    }

    match kind {
        ElementKind::RichText => {
            // The rich-text editor owns its content model; hand it the new
            // text through its update event rather than writing directly.
            doc.dispatch_ai_update(id, text);
        }
        ElementKind::TextInput | ElementKind::TextArea => {
            doc.set_value(id, text);
            doc.dispatch_input(id);
        }
    }
    doc.focus(id);
    assistant_debug!("inject: applied {} chars to '{}'", text.len(), id);
    InjectOutcome::Applied
}

/// Per-language accounting for a multilingual fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FanOutReport {
    pub applied: Vec<Lang>,
    pub skipped: Vec<Lang>,
    /// True when the target carried no language suffix and the fan-out
    /// degraded to a single write.
    pub degraded: bool,
}

/// Fans `values` out across the field group the element named `id`
/// belongs to, updating each sibling `{base}-{code}` independently.
///
/// Missing siblings are skipped per-language. When `id` carries no
/// recognized language suffix the call degrades to a single
/// [`inject_value`] using the display-language fallback order. Focus ends
/// up back on the originally targeted element either way.
pub fn inject_multilingual(
    doc: &dyn Document,
    id: &str,
    values: &BTreeMap<Lang, String>,
    ui_lang: Lang,
) -> FanOutReport {
    let Some((base, _)) = split_lang_suffix(id) else {
        let fallback = AssistantResult::Multilingual(values.clone()).display_string(ui_lang);
        let report = FanOutReport {
            degraded: true,
            ..FanOutReport::default()
        };
        if let Some(text) = fallback {
            inject_value(doc, id, &text);
        }
        return report;
    };

    let mut report = FanOutReport::default();
    for (lang, text) in values {
        let sibling = sibling_id(base, *lang);
        match inject_value(doc, &sibling, text) {
            InjectOutcome::Applied => report.applied.push(*lang),
            outcome => {
                assistant_warn!(
                    "inject: skipping '{}' for language {} ({:?})",
                    sibling,
                    lang,
                    outcome
                );
                report.skipped.push(*lang);
            }
        }
    }

    // The user's field keeps focus regardless of fan-out order.
    doc.focus(id);
    report
}
