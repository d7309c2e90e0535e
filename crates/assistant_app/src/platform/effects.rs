use std::sync::{mpsc, Arc};
use std::thread;

use assistant_core::{Effect, Lang, Msg};
use assistant_engine::{
    inject_multilingual, inject_value, AssistantEvent, AssistantHandle, Document,
};
use assistant_logging::{assistant_info, assistant_warn};

/// Executes the effects the pure update function returns.
pub struct EffectRunner {
    handle: AssistantHandle,
    doc: Arc<dyn Document>,
    msg_tx: mpsc::Sender<Msg>,
    ui_lang: Lang,
}

impl EffectRunner {
    pub fn new(
        handle: AssistantHandle,
        doc: Arc<dyn Document>,
        msg_tx: mpsc::Sender<Msg>,
        ui_lang: Lang,
    ) -> Self {
        Self {
            handle,
            doc,
            msg_tx,
            ui_lang,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ArmGraceTimer { generation, delay } => {
                    // One detached sleeper per arm; the generation token in
                    // the message is what makes stale timers harmless.
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(delay);
                        let _ = msg_tx.send(Msg::GraceElapsed { generation });
                    });
                }
                Effect::RequestAi {
                    request_id,
                    request,
                } => {
                    assistant_info!("RequestAi id={} mode={:?}", request_id, request.mode);
                    self.handle.run(request_id, request);
                }
                Effect::ApplyValue { target, text } => {
                    let outcome = inject_value(self.doc.as_ref(), &target.id, &text);
                    assistant_info!("ApplyValue target={} outcome={:?}", target.id, outcome);
                }
                Effect::ApplyMultilingual { target, values } => {
                    let report =
                        inject_multilingual(self.doc.as_ref(), &target.id, &values, self.ui_lang);
                    if !report.skipped.is_empty() {
                        assistant_warn!(
                            "ApplyMultilingual target={} skipped languages {:?}",
                            target.id,
                            report.skipped
                        );
                    }
                    assistant_info!(
                        "ApplyMultilingual target={} applied={:?}",
                        target.id,
                        report.applied
                    );
                }
            }
        }
    }

    /// Polls the AI pipeline for a finished request.
    pub fn try_recv_completion(&self) -> Option<AssistantEvent> {
        self.handle.try_recv()
    }
}
