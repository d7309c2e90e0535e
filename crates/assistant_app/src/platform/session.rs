use std::sync::{mpsc, Arc};

use assistant_core::{update, AssistantState, AssistantViewModel, Msg};
use assistant_engine::{AiClientSettings, AssistantEvent, AssistantHandle, Document};
use assistant_logging::assistant_debug;

use super::effects::EffectRunner;
use super::events::{map_dom_event, DomEvent};
use super::settings::Settings;

/// One page session of the assistant: core state, the document seam, and
/// the effect runner, driven by messages from a single channel.
///
/// All mutation happens on the caller's thread; background threads (grace
/// timers, the AI pipeline) only feed messages and events back in, drained
/// by [`Session::pump`].
pub struct Session {
    state: AssistantState,
    doc: Arc<dyn Document>,
    effects: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl Session {
    pub fn new(doc: Arc<dyn Document>, settings: Settings) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let handle = AssistantHandle::new(AiClientSettings::new(settings.endpoint.clone()));
        let ui_lang = settings.ui_lang();
        let effects = EffectRunner::new(handle, doc.clone(), msg_tx.clone(), ui_lang);

        let mut session = Self {
            state: AssistantState::new(),
            doc,
            effects,
            msg_tx,
            msg_rx,
        };
        session.dispatch(Msg::UiLanguageChanged(ui_lang));
        session
    }

    /// Sender for background message sources (timers, host bridges).
    pub fn sender(&self) -> mpsc::Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Classifies a raw DOM event and feeds the resulting message through
    /// the state machine.
    pub fn handle_dom_event(&mut self, event: DomEvent) {
        if let Some(msg) = map_dom_event(self.doc.as_ref(), event) {
            self.dispatch(msg);
        }
    }

    /// Runs one message through the pure update function and executes the
    /// returned effects.
    pub fn dispatch(&mut self, msg: Msg) {
        assistant_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }

    /// User clicked Improve: read the live text off the active element and
    /// submit it. No-ops when nothing is tracked.
    pub fn improve(&mut self) {
        let Some(target) = self.state.active_element().cloned() else {
            return;
        };
        let text = self.doc.value(&target.id).unwrap_or_default();
        self.dispatch(Msg::ImproveClicked { text });
    }

    /// Drains finished AI requests and queued messages (grace timers and
    /// anything sent through [`Session::sender`]).
    pub fn pump(&mut self) {
        while let Some(event) = self.effects.try_recv_completion() {
            let AssistantEvent::RequestCompleted { request_id, result } = event;
            self.dispatch(Msg::RequestFinished {
                request_id,
                outcome: result.map_err(|err| err.to_string()),
            });
        }

        let pending: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in pending {
            self.dispatch(msg);
        }
    }

    pub fn view(&self) -> AssistantViewModel {
        self.state.view()
    }

    /// Whether the view changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }
}
