use std::collections::BTreeMap;

use crate::context::ContextHint;
use crate::lang::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Improve,
    Generate,
}

/// Input to the external AI operation. `text` carries the existing field
/// content for Improve; `prompt` carries the user's free-text request for
/// Generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRequest {
    pub mode: Mode,
    pub text: Option<String>,
    pub prompt: Option<String>,
    pub context: Option<ContextHint>,
}

/// Outcome of the external AI operation: either a single string or a
/// per-language mapping for multilingual field groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantResult {
    Single(String),
    Multilingual(BTreeMap<Lang, String>),
}

impl AssistantResult {
    /// A mapping only counts as multilingual when every configured
    /// language carries a non-empty entry; anything less degrades to
    /// single-value handling.
    pub fn is_complete_multilingual(&self) -> bool {
        match self {
            AssistantResult::Single(_) => false,
            AssistantResult::Multilingual(values) => Lang::ALL
                .iter()
                .all(|lang| values.get(lang).is_some_and(|text| !text.trim().is_empty())),
        }
    }

    /// Best single display string: the current UI language first, then
    /// English, French, Arabic, then whatever entry is available.
    pub fn display_string(&self, ui_lang: Lang) -> Option<String> {
        match self {
            AssistantResult::Single(text) => Some(text.clone()),
            AssistantResult::Multilingual(values) => {
                let preferred = std::iter::once(ui_lang).chain(Lang::ALL);
                for lang in preferred {
                    if let Some(text) = values.get(&lang) {
                        if !text.trim().is_empty() {
                            return Some(text.clone());
                        }
                    }
                }
                values.values().find(|text| !text.is_empty()).cloned()
            }
        }
    }
}
