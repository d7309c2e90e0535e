use std::collections::BTreeMap;

use assistant_core::{AssistantRequest, AssistantResult, Lang, Mode};
use serde::{Deserialize, Serialize};

/// Request body for the AI text operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireRequest {
    pub mode: WireMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<WireContext>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireMode {
    Improve,
    Generate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireContext {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl From<&AssistantRequest> for WireRequest {
    fn from(request: &AssistantRequest) -> Self {
        Self {
            mode: match request.mode {
                Mode::Improve => WireMode::Improve,
                Mode::Generate => WireMode::Generate,
            },
            text: request.text.clone(),
            prompt: request.prompt.clone(),
            context: request.context.as_ref().map(|hint| WireContext {
                kind: hint.kind.as_str().to_string(),
                id: hint.id.clone(),
            }),
        }
    }
}

/// Response body: `result` is either a plain string or a per-language
/// object; a populated `error` marks failure even on a 2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireResponse {
    #[serde(default)]
    pub result: Option<WireResult>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireResult {
    PerLanguage(PerLanguageText),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PerLanguageText {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub fr: Option<String>,
    #[serde(default)]
    pub ar: Option<String>,
}

impl WireResult {
    /// Converts the wire shape into the core result type, keeping only
    /// the languages the payload actually provided.
    pub fn into_result(self) -> AssistantResult {
        match self {
            WireResult::Text(text) => AssistantResult::Single(text),
            WireResult::PerLanguage(languages) => {
                let mut values = BTreeMap::new();
                if let Some(text) = languages.en {
                    values.insert(Lang::En, text);
                }
                if let Some(text) = languages.fr {
                    values.insert(Lang::Fr, text);
                }
                if let Some(text) = languages.ar {
                    values.insert(Lang::Ar, text);
                }
                AssistantResult::Multilingual(values)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_renamed_context_type() {
        let wire = WireRequest {
            mode: WireMode::Improve,
            text: Some("raw".to_string()),
            prompt: None,
            context: Some(WireContext {
                kind: "project".to_string(),
                id: Some("42".to_string()),
            }),
        };
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "mode": "improve",
                "text": "raw",
                "context": { "type": "project", "id": "42" },
            })
        );
    }

    #[test]
    fn response_accepts_both_result_shapes() {
        let single: WireResponse =
            serde_json::from_str(r#"{ "result": "better" }"#).unwrap();
        assert_eq!(
            single.result.unwrap().into_result(),
            AssistantResult::Single("better".to_string())
        );

        let mapped: WireResponse =
            serde_json::from_str(r#"{ "result": { "en": "a", "fr": "b" } }"#).unwrap();
        match mapped.result.unwrap().into_result() {
            AssistantResult::Multilingual(values) => {
                assert_eq!(values.get(&Lang::En).map(String::as_str), Some("a"));
                assert_eq!(values.get(&Lang::Fr).map(String::as_str), Some("b"));
                assert_eq!(values.get(&Lang::Ar), None);
            }
            other => panic!("expected multilingual, got {other:?}"),
        }
    }
}
