use serde::{Deserialize, Serialize};

/// OpenAI-style chat completion request, as sent by chat front-ends
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    /// Pipeline model identifier (e.g., "youdao-translate")
    pub model: String,

    /// Conversation history; the last user message is translated
    pub messages: Vec<ChatMessage>,

    /// Clients always get a stream back; accepted for compatibility
    #[serde(default)]
    pub stream: bool,

    /// Per-request override of the configured target language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    pub role: String,

    /// Either a string or array of content parts
    pub content: MessageContent,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentPart {
    #[serde(rename = "type")]
    pub part_type: String, // "text", "image_url", ...

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MessageContent {
    /// Concatenated text of all text parts
    pub fn text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter(|p| p.part_type == "text")
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Entry of the `/v1/models` listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub object: String,
}
