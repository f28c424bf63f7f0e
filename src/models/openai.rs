// OpenAI chat completions type definitions
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Chat completions request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Target model identifier (e.g., "gpt-4o-mini").
    pub model: String,

    /// Conversation turns. The describer always sends a single user turn.
    pub messages: Vec<ChatMessage>,

    /// Hard cap on generated tokens.
    pub max_tokens: u32,
}

/// A single conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String, // "user", "assistant" or "system"
    pub content: Vec<ContentPart>,
}

/// Individual part of a multimodal user message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text instruction.
    Text { text: String },

    /// Image reference, either a remote URL or a `data:` URI.
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageUrl {
    pub url: String,

    /// Fidelity hint: "low", "high" or "auto".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Chat completions response body.
///
/// Every field is optional so that error bodies (`{"error": {...}}`) still
/// deserialize and the caller can decide what a missing completion means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,

    /// Present on non-2xx responses
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<AssistantMessage>,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if the response carries one
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }
}
