//! Assistant engine: DOM effect execution and the AI request pipeline.
mod client;
mod document;
mod engine;
mod inject;
mod memory;
mod protocol;
mod types;

pub use client::{AiClient, AiClientSettings, ReqwestAiClient};
pub use document::Document;
pub use engine::AssistantHandle;
pub use inject::{inject_multilingual, inject_value, FanOutReport, InjectOutcome};
pub use memory::{DomRecord, MemoryDocument};
pub use protocol::{PerLanguageText, WireContext, WireMode, WireRequest, WireResponse, WireResult};
pub use types::{AiError, AiFailureKind, AssistantEvent};
