use serde::{Deserialize, Serialize};

use crate::ai::BilingualFields;
use crate::prompt::AgeLevel;

/// One tool invocation as received from the caller. Ephemeral, never
/// persisted.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    pub tool_id: String,
    pub user_input: String,
    pub age_level: AgeLevel,
}

impl ToolRequest {
    pub fn new(
        tool_id: impl Into<String>,
        user_input: impl Into<String>,
        age_level: AgeLevel,
    ) -> Self {
        Self {
            tool_id: tool_id.into(),
            user_input: user_input.into(),
            age_level,
        }
    }
}

/// The unit of output for every tool.
///
/// `error == None` implies both text fields are present. The only partial
/// state is the song path: texts present, `error` set, audio per-language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BilingualResult {
    pub arabic_text: Option<String>,
    pub french_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arabic_audio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub french_audio: Option<String>,
    pub error: Option<String>,
}

impl BilingualResult {
    /// A text-only success.
    pub fn from_fields(fields: BilingualFields) -> Self {
        Self {
            arabic_text: Some(fields.arabic),
            french_text: Some(fields.french),
            ..Self::default()
        }
    }

    /// A total failure: no content, user-facing message only.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
