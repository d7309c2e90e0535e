use std::collections::BTreeMap;
use std::time::Duration;

use crate::lang::Lang;
use crate::request::AssistantRequest;
use crate::state::{ElementRef, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Arm the single cancellable grace timer. A timer whose generation no
    /// longer matches the state when it fires must be ignored.
    ArmGraceTimer { generation: u64, delay: Duration },
    /// Issue the external AI operation.
    RequestAi {
        request_id: RequestId,
        request: AssistantRequest,
    },
    /// Write one value into the target element through the
    /// framework-observed assignment path, then restore focus.
    ApplyValue { target: ElementRef, text: String },
    /// Fan a multilingual result out across the target's field group.
    ApplyMultilingual {
        target: ElementRef,
        values: BTreeMap<Lang, String>,
    },
}
