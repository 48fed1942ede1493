use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status object returned by the POST routes of the parc API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critique_id: Option<i64>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_result(mut self, result: impl Into<Value>) -> Self {
        self.result = Some(result.into());
        self
    }

    pub fn with_critique_id(mut self, critique_id: i64) -> Self {
        self.critique_id = Some(critique_id);
        self
    }
}
