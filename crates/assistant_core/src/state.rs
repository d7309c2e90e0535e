use std::time::Duration;

use crate::lang::Lang;
use crate::request::Mode;
use crate::view_model::{AssistantViewModel, PopupView};

/// Delay between an eligible element losing focus and the tracker giving
/// up on it, unless focus moved into the assistant popup.
pub const GRACE_PERIOD: Duration = Duration::from_millis(500);

pub type RequestId = u64;

/// The element kinds the tracker will adopt as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    TextInput,
    TextArea,
    RichText,
}

/// Identity handle to an editable element. The core never owns the
/// element; it only remembers its identifier and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef {
    pub id: String,
    pub kind: ElementKind,
}

impl ElementRef {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// Last observed pointer-down coordinates in document space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Internal popup UI state, distinct from the tracker phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupMode {
    #[default]
    Idle,
    Expanded,
    Prompting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Tracker phases over the (tracked, preserved) element pair.
///
/// `Tracking` keeps both references on the same element. `Grace` drops the
/// tracked reference but preserves the element while the grace timer runs,
/// so a blur caused by clicking into the popup does not lose the target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum TrackerPhase {
    #[default]
    Idle,
    Tracking {
        element: ElementRef,
    },
    Grace {
        preserved: ElementRef,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct PendingRequest {
    id: RequestId,
    mode: Mode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantState {
    phase: TrackerPhase,
    pointer: Option<PointerPosition>,
    page_path: String,
    ui_lang: Lang,
    popup_mode: PopupMode,
    prompt_text: String,
    pending: Option<PendingRequest>,
    next_request_id: RequestId,
    grace_generation: u64,
    notice: Option<Notice>,
    dirty: bool,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            phase: TrackerPhase::Idle,
            pointer: None,
            page_path: "/".to_string(),
            ui_lang: Lang::En,
            popup_mode: PopupMode::Idle,
            prompt_text: String::new(),
            pending: None,
            next_request_id: 1,
            grace_generation: 0,
            notice: None,
            dirty: false,
        }
    }
}

impl AssistantState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The element currently adopted for AI editing, if any.
    pub fn tracked_element(&self) -> Option<&ElementRef> {
        match &self.phase {
            TrackerPhase::Tracking { element } => Some(element),
            _ => None,
        }
    }

    /// The element surviving a focus transition into the popup, if any.
    pub fn preserved_element(&self) -> Option<&ElementRef> {
        match &self.phase {
            TrackerPhase::Tracking { element } => Some(element),
            TrackerPhase::Grace { preserved } => Some(preserved),
            TrackerPhase::Idle => None,
        }
    }

    /// Injection target: the tracked element, falling back to the
    /// preserved one while a popup interaction holds focus.
    pub fn active_element(&self) -> Option<&ElementRef> {
        self.tracked_element().or_else(|| self.preserved_element())
    }

    /// The assistant is gated to admin-authenticated pages.
    pub fn in_admin(&self) -> bool {
        self.page_path == "/admin" || self.page_path.starts_with("/admin/")
    }

    pub fn page_path(&self) -> &str {
        &self.page_path
    }

    pub fn ui_lang(&self) -> Lang {
        self.ui_lang
    }

    pub fn pointer(&self) -> Option<PointerPosition> {
        self.pointer
    }

    pub fn popup_mode(&self) -> PopupMode {
        self.popup_mode
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn request_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn view(&self) -> AssistantViewModel {
        let popup = match (self.active_element(), self.pointer, self.in_admin()) {
            (Some(_), Some(anchor), true) => Some(PopupView {
                mode: self.popup_mode,
                prompt_text: self.prompt_text.clone(),
                busy: self.pending.is_some(),
                anchor,
            }),
            _ => None,
        };
        AssistantViewModel {
            popup,
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_page_path(&mut self, path: String) {
        if self.page_path != path {
            self.page_path = path;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_ui_lang(&mut self, lang: Lang) {
        if self.ui_lang != lang {
            self.ui_lang = lang;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_pointer(&mut self, position: PointerPosition) {
        self.pointer = Some(position);
        self.mark_dirty();
    }

    /// Adopts `element` as tracked, cancelling any pending grace window.
    pub(crate) fn adopt(&mut self, element: ElementRef) {
        // Bumping the generation invalidates a timer that is already armed.
        self.grace_generation = self.grace_generation.wrapping_add(1);
        self.phase = TrackerPhase::Tracking { element };
        self.mark_dirty();
    }

    /// Moves the tracked element into the grace window, returning the
    /// generation token the armed timer must carry to still count.
    pub(crate) fn begin_grace(&mut self) -> Option<u64> {
        let element = self.tracked_element().cloned()?;
        self.grace_generation = self.grace_generation.wrapping_add(1);
        self.phase = TrackerPhase::Grace { preserved: element };
        self.mark_dirty();
        Some(self.grace_generation)
    }

    /// Clears the preserved element if the grace timer with `generation`
    /// is still the current one. Stale timers are ignored.
    pub(crate) fn end_grace_if_current(&mut self, generation: u64) {
        if generation != self.grace_generation {
            return;
        }
        if matches!(self.phase, TrackerPhase::Grace { .. }) {
            self.phase = TrackerPhase::Idle;
            self.reset_popup();
            self.mark_dirty();
        }
    }

    /// Immediate dismissal: the user clicked elsewhere to do something
    /// unrelated. Both references are cleared without a grace period.
    pub(crate) fn abandon(&mut self) {
        if matches!(self.phase, TrackerPhase::Idle) && self.popup_mode == PopupMode::Idle {
            return;
        }
        self.grace_generation = self.grace_generation.wrapping_add(1);
        self.phase = TrackerPhase::Idle;
        self.reset_popup();
        self.mark_dirty();
    }

    pub(crate) fn set_popup_mode(&mut self, mode: PopupMode) {
        if self.popup_mode != mode {
            self.popup_mode = mode;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_prompt_text(&mut self, text: String) {
        if self.prompt_text != text {
            self.prompt_text = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn reset_popup(&mut self) {
        self.popup_mode = PopupMode::Idle;
        self.prompt_text.clear();
    }

    pub(crate) fn begin_request(&mut self, mode: Mode) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending = Some(PendingRequest { id, mode });
        self.mark_dirty();
        id
    }

    /// Completes the in-flight request if `request_id` matches, returning
    /// its mode. Stale or unknown completions return `None`.
    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> Option<Mode> {
        match &self.pending {
            Some(pending) if pending.id == request_id => {
                let mode = pending.mode;
                self.pending = None;
                self.mark_dirty();
                Some(mode)
            }
            _ => None,
        }
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }
}
