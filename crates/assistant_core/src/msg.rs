use crate::lang::Lang;
use crate::request::AssistantResult;
use crate::state::{ElementRef, PointerPosition, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Navigation landed on a new page path.
    RouteChanged(String),
    /// The site display language changed.
    UiLanguageChanged(Lang),
    /// An eligible element gained focus (the adapter pre-filters kinds).
    FocusGained { element: ElementRef },
    /// An element lost focus; `into_popup` is true when the new focus
    /// target sits inside the assistant popup.
    FocusLost {
        element_id: String,
        into_popup: bool,
    },
    /// Document-level pointer-down, pre-classified by the adapter.
    PointerDown {
        position: PointerPosition,
        in_popup: bool,
        on_eligible: bool,
    },
    /// The grace timer armed with `generation` fired.
    GraceElapsed { generation: u64 },
    /// User expanded the collapsed popup icon.
    PopupExpanded,
    /// User asked for the free-text Generate prompt box.
    PromptRequested,
    /// User edited the Generate prompt text.
    PromptChanged(String),
    /// User dismissed the prompt box back to the action row.
    PromptDismissed,
    /// User clicked Improve; carries the live text read from the element.
    ImproveClicked { text: String },
    /// User submitted the Generate prompt.
    PromptSubmitted,
    /// The AI request completed, successfully or not.
    RequestFinished {
        request_id: RequestId,
        outcome: Result<AssistantResult, String>,
    },
    /// User dismissed the transient notification.
    NoticeDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
