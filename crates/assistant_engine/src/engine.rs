use std::sync::{mpsc, Arc};
use std::thread;

use assistant_core::{AssistantRequest, RequestId};

use crate::client::{AiClient, AiClientSettings, ReqwestAiClient};
use crate::types::AssistantEvent;

enum AssistantCommand {
    Run {
        request_id: RequestId,
        request: AssistantRequest,
    },
}

/// Bridges the synchronous update loop to the asynchronous AI client.
///
/// Commands go in over a channel; a dedicated thread owns the tokio
/// runtime and pushes completion events back out. The caller polls
/// [`AssistantHandle::try_recv`] from its own loop.
pub struct AssistantHandle {
    cmd_tx: mpsc::Sender<AssistantCommand>,
    event_rx: mpsc::Receiver<AssistantEvent>,
}

impl AssistantHandle {
    pub fn new(settings: AiClientSettings) -> Self {
        Self::with_client(Arc::new(ReqwestAiClient::new(settings)))
    }

    pub fn with_client(client: Arc<dyn AiClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn run(&self, request_id: RequestId, request: AssistantRequest) {
        let _ = self.cmd_tx.send(AssistantCommand::Run {
            request_id,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<AssistantEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn AiClient,
    command: AssistantCommand,
    event_tx: mpsc::Sender<AssistantEvent>,
) {
    match command {
        AssistantCommand::Run {
            request_id,
            request,
        } => {
            let result = client.run(&request).await;
            let _ = event_tx.send(AssistantEvent::RequestCompleted { request_id, result });
        }
    }
}
