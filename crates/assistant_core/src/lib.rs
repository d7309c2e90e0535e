//! Assistant core: pure state machine and view-model helpers.
mod context;
mod effect;
mod lang;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub use context::{infer_context, ContextHint, ContextKind};
pub use effect::Effect;
pub use lang::{sibling_id, split_lang_suffix, Lang};
pub use msg::Msg;
pub use request::{AssistantRequest, AssistantResult, Mode};
pub use state::{
    AssistantState, ElementKind, ElementRef, Notice, NoticeKind, PointerPosition, PopupMode,
    RequestId, GRACE_PERIOD,
};
pub use update::update;
pub use view_model::{
    popup_origin, AssistantViewModel, PopupView, Size, Viewport, DEFAULT_POPUP_SIZE, POPUP_OFFSET,
};
