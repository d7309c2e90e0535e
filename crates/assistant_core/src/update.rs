use crate::context::infer_context;
use crate::request::{AssistantRequest, AssistantResult, Mode};
use crate::state::{AssistantState, Notice, PopupMode, GRACE_PERIOD};
use crate::{Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AssistantState, msg: Msg) -> (AssistantState, Vec<Effect>) {
    let effects = match msg {
        Msg::RouteChanged(path) => {
            // Navigation drops whatever the tracker held; an in-flight
            // request is left to finish and its result will be discarded
            // for want of a target.
            state.set_page_path(path);
            state.abandon();
            Vec::new()
        }
        Msg::UiLanguageChanged(lang) => {
            state.set_ui_lang(lang);
            Vec::new()
        }
        Msg::FocusGained { element } => {
            if state.in_admin() {
                state.adopt(element);
            }
            Vec::new()
        }
        Msg::FocusLost {
            element_id,
            into_popup,
        } => {
            if into_popup {
                // Moving focus into the popup is not abandonment.
                return (state, Vec::new());
            }
            let lost_tracked = state
                .tracked_element()
                .is_some_and(|element| element.id == element_id);
            if lost_tracked {
                match state.begin_grace() {
                    Some(generation) => vec![Effect::ArmGraceTimer {
                        generation,
                        delay: GRACE_PERIOD,
                    }],
                    None => Vec::new(),
                }
            } else {
                Vec::new()
            }
        }
        Msg::PointerDown {
            position,
            in_popup,
            on_eligible,
        } => {
            if in_popup {
                // Placement must not jitter while interacting with the popup,
                // and popup clicks never count as "clicked elsewhere".
                return (state, Vec::new());
            }
            state.set_pointer(position);
            if !on_eligible && state.in_admin() {
                state.abandon();
            }
            Vec::new()
        }
        Msg::GraceElapsed { generation } => {
            state.end_grace_if_current(generation);
            Vec::new()
        }
        Msg::PopupExpanded => {
            if state.active_element().is_some() {
                state.set_popup_mode(PopupMode::Expanded);
            }
            Vec::new()
        }
        Msg::PromptRequested => {
            if state.active_element().is_some() && !state.request_in_flight() {
                state.set_popup_mode(PopupMode::Prompting);
            }
            Vec::new()
        }
        Msg::PromptChanged(text) => {
            state.set_prompt_text(text);
            Vec::new()
        }
        Msg::PromptDismissed => {
            if state.popup_mode() == PopupMode::Prompting {
                state.set_popup_mode(PopupMode::Expanded);
            }
            Vec::new()
        }
        Msg::ImproveClicked { text } => {
            if text.trim().is_empty() {
                return (state, Vec::new());
            }
            issue_request(&mut state, Mode::Improve, Some(text), None)
        }
        Msg::PromptSubmitted => {
            let prompt = state.prompt_text().to_string();
            if prompt.trim().is_empty() {
                return (state, Vec::new());
            }
            issue_request(&mut state, Mode::Generate, None, Some(prompt))
        }
        Msg::RequestFinished {
            request_id,
            outcome,
        } => {
            let Some(mode) = state.finish_request(request_id) else {
                // Stale completion; the guard already moved on.
                return (state, Vec::new());
            };
            match outcome {
                Ok(result) => apply_result(&mut state, mode, result),
                Err(message) => {
                    state.set_notice(Notice::error(message));
                    state.reset_popup();
                    state.mark_dirty();
                    Vec::new()
                }
            }
        }
        Msg::NoticeDismissed => {
            state.clear_notice();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn issue_request(
    state: &mut AssistantState,
    mode: Mode,
    text: Option<String>,
    prompt: Option<String>,
) -> Vec<Effect> {
    if state.request_in_flight() {
        // Simple in-flight guard: no queue, no retry.
        return Vec::new();
    }
    let Some(target) = state.active_element() else {
        return Vec::new();
    };
    let context = infer_context(state.page_path(), &target.id);
    let request_id = state.begin_request(mode);
    vec![Effect::RequestAi {
        request_id,
        request: AssistantRequest {
            mode,
            text,
            prompt,
            context,
        },
    }]
}

fn apply_result(state: &mut AssistantState, mode: Mode, result: AssistantResult) -> Vec<Effect> {
    state.reset_popup();
    let Some(target) = state.active_element().cloned() else {
        // The field was lost mid-request; discarding is the safe outcome.
        state.mark_dirty();
        return Vec::new();
    };

    // Re-establish tracking so a follow-up Improve acts on the fresh text.
    state.adopt(target.clone());
    state.set_notice(Notice::success(match mode {
        Mode::Improve => "Text improved!",
        Mode::Generate => "Text generated!",
    }));

    let grouped = crate::lang::split_lang_suffix(&target.id).is_some();
    if grouped && result.is_complete_multilingual() {
        if let AssistantResult::Multilingual(values) = result {
            return vec![Effect::ApplyMultilingual { target, values }];
        }
        Vec::new()
    } else {
        match result.display_string(state.ui_lang()) {
            Some(text) => vec![Effect::ApplyValue { target, text }],
            None => Vec::new(),
        }
    }
}
