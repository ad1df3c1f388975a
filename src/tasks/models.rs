//! Model identifiers and the vision setting.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// LLM used to drive a task.
///
/// The associated constants cover the models the service documents; any other
/// identifier can be passed with [`LlmModel::new`] and is sent verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LlmModel(Cow<'static, str>);

impl LlmModel {
    pub const BROWSER_USE: LlmModel = LlmModel::from_static("browser-use-llm");
    pub const GPT_4_1: LlmModel = LlmModel::from_static("gpt-4.1");
    pub const GPT_4_1_MINI: LlmModel = LlmModel::from_static("gpt-4.1-mini");
    pub const O4_MINI: LlmModel = LlmModel::from_static("o4-mini");
    pub const O3: LlmModel = LlmModel::from_static("o3");
    pub const GEMINI_2_5_FLASH: LlmModel = LlmModel::from_static("gemini-2.5-flash");
    pub const GEMINI_2_5_PRO: LlmModel = LlmModel::from_static("gemini-2.5-pro");
    pub const GEMINI_3_PRO_PREVIEW: LlmModel = LlmModel::from_static("gemini-3-pro-preview");
    pub const GEMINI_FLASH_LATEST: LlmModel = LlmModel::from_static("gemini-flash-latest");
    pub const GEMINI_FLASH_LITE_LATEST: LlmModel =
        LlmModel::from_static("gemini-flash-lite-latest");
    pub const CLAUDE_SONNET_4: LlmModel = LlmModel::from_static("claude-sonnet-4-20250514");
    pub const CLAUDE_SONNET_4_5: LlmModel = LlmModel::from_static("claude-sonnet-4-5-20250929");
    pub const CLAUDE_OPUS_4_5: LlmModel = LlmModel::from_static("claude-opus-4-5-20251101");
    pub const GPT_4O: LlmModel = LlmModel::from_static("gpt-4o");
    pub const GPT_4O_MINI: LlmModel = LlmModel::from_static("gpt-4o-mini");
    pub const LLAMA_4_MAVERICK: LlmModel =
        LlmModel::from_static("llama-4-maverick-17b-128e-instruct");
    pub const CLAUDE_3_7_SONNET: LlmModel = LlmModel::from_static("claude-3-7-sonnet-20250219");

    const fn from_static(id: &'static str) -> Self {
        LlmModel(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        LlmModel(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LlmModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for LlmModel {
    fn from(id: &str) -> Self {
        LlmModel::new(id)
    }
}

impl From<String> for LlmModel {
    fn from(id: String) -> Self {
        LlmModel::new(id)
    }
}

/// Whether the agent gets screenshots: on, off, or let the service decide.
///
/// Serialized as a JSON boolean or the string `"auto"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vision {
    Enabled(bool),
    Auto,
}

impl From<bool> for Vision {
    fn from(enabled: bool) -> Self {
        Vision::Enabled(enabled)
    }
}

impl Serialize for Vision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Vision::Enabled(b) => serializer.serialize_bool(*b),
            Vision::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for Vision {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Ok(Vision::Enabled(b)),
            Raw::Text(s) if s == "auto" => Ok(Vision::Auto),
            Raw::Text(other) => Err(serde::de::Error::custom(format!(
                "expected a boolean or \"auto\", got {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vision_serializes_as_bool_or_auto() {
        assert_eq!(serde_json::to_value(Vision::Enabled(false)).unwrap(), json!(false));
        assert_eq!(serde_json::to_value(Vision::Auto).unwrap(), json!("auto"));
    }

    #[test]
    fn vision_rejects_other_strings() {
        assert!(serde_json::from_value::<Vision>(json!("sometimes")).is_err());
        assert_eq!(
            serde_json::from_value::<Vision>(json!("auto")).unwrap(),
            Vision::Auto
        );
        assert_eq!(
            serde_json::from_value::<Vision>(json!(true)).unwrap(),
            Vision::Enabled(true)
        );
    }

    #[test]
    fn custom_models_pass_through() {
        let model = LlmModel::new("my-finetune-v2");
        assert_eq!(serde_json::to_value(&model).unwrap(), json!("my-finetune-v2"));
        assert_eq!(LlmModel::CLAUDE_SONNET_4_5.as_str(), "claude-sonnet-4-5-20250929");
    }
}
