use crate::state::{Notice, PointerPosition, PopupMode};

/// Offset between the anchoring pointer position and the popup corner.
pub const POPUP_OFFSET: f64 = 15.0;

/// Estimate used before the popup has been rendered and measured.
pub const DEFAULT_POPUP_SIZE: Size = Size {
    width: 200.0,
    height: 50.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// What the assistant popup should render, if anything.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    pub mode: PopupMode,
    pub prompt_text: String,
    pub busy: bool,
    pub anchor: PointerPosition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantViewModel {
    pub popup: Option<PopupView>,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

/// Places the popup's top-left corner near `anchor`, flipping to the other
/// side of the pointer when the default placement would overflow the
/// viewport's right or bottom edge.
pub fn popup_origin(anchor: PointerPosition, popup: Size, viewport: Viewport) -> PointerPosition {
    let mut x = anchor.x + POPUP_OFFSET;
    let mut y = anchor.y + POPUP_OFFSET;
    if x + popup.width > viewport.width {
        x = anchor.x - popup.width - POPUP_OFFSET;
    }
    if y + popup.height > viewport.height {
        y = anchor.y - popup.height - POPUP_OFFSET;
    }
    PointerPosition { x, y }
}
