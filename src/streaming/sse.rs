use crate::error::TranslateError;

/// Normalized event produced for the caller
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Translated text delta
    Chunk(String),
    /// Normal completion
    Done,
    /// Failure; always the last event of its sequence
    Error { kind: String, message: String },
}

impl StreamEvent {
    pub fn error(err: &TranslateError) -> Self {
        StreamEvent::Error {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, StreamEvent::Chunk(_))
    }
}

/// Serializes stream events as OpenAI-compatible SSE
pub struct SSEEventGenerator {
    id: String,
    model_name: String,
    created: i64,
}

impl SSEEventGenerator {
    pub fn new(model_name: String) -> Self {
        Self {
            id: format!("chatcmpl-{}", uuid::Uuid::new_v4()),
            model_name,
            created: chrono::Utc::now().timestamp(),
        }
    }

    pub fn format(&self, event: &StreamEvent) -> String {
        match event {
            StreamEvent::Chunk(text) => self.format_chunk(text),
            StreamEvent::Done => Self::format_done(),
            StreamEvent::Error { kind, message } => Self::format_error(kind, message),
        }
    }

    fn format_chunk(&self, text: &str) -> String {
        let data = serde_json::json!({
            "id": self.id,
            "object": "chat.completion.chunk",
            "created": self.created,
            "model": self.model_name,
            "choices": [{
                "index": 0,
                "delta": {
                    "content": text
                },
                "finish_reason": null
            }]
        });
        format!("data: {}\n\n", data)
    }

    pub fn format_done() -> String {
        "data: [DONE]\n\n".to_string()
    }

    /// Format error as SSE event
    pub fn format_error(error_type: &str, message: &str) -> String {
        let data = serde_json::json!({
            "error": {
                "type": error_type,
                "message": message
            }
        });
        format!("data: {}\n\n", data)
    }
}
