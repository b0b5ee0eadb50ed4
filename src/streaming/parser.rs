use crate::error::TranslateError;
use crate::models::youdao::YoudaoPayload;
use bytes::{Buf, BytesMut};

/// Longest provider line accepted before the stream is failed
pub const MAX_LINE_BYTES: usize = 1 << 20;

/// Decoded unit of provider output
#[derive(Debug)]
pub enum ProviderEvent {
    /// Translated text fragment
    Fragment(String),
    /// Provider signaled end of stream
    End,
    /// Provider-reported or decoding failure
    Failure(TranslateError),
}

/// Stateful parser for the provider's line-delimited SSE body
///
/// Partial lines are buffered across network chunks.
pub struct SseLineParser {
    buffer: BytesMut,
    /// Name from the last `event:` line, reset at each blank line
    current_event: Option<String>,
}

impl SseLineParser {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(8192),
            current_event: None,
        }
    }

    /// Feed new data and decode every complete line
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<ProviderEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line = self.buffer.split_to(pos);
            self.buffer.advance(1);
            self.decode_line(&line, &mut events);
        }

        if self.buffer.len() > MAX_LINE_BYTES {
            let pending = self.buffer.len();
            self.buffer.clear();
            events.push(ProviderEvent::Failure(TranslateError::ProviderPayload(
                format!("Stream line exceeds {} bytes ({} pending)", MAX_LINE_BYTES, pending),
            )));
        }
        events
    }

    /// Decode whatever is left when the body ends without a trailing newline
    pub fn finish(&mut self) -> Vec<ProviderEvent> {
        let mut events = Vec::new();
        if !self.buffer.is_empty() {
            let line = self.buffer.split();
            self.decode_line(&line, &mut events);
        }
        events
    }

    fn decode_line(&mut self, raw: &[u8], events: &mut Vec<ProviderEvent>) {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                events.push(ProviderEvent::Failure(TranslateError::ProviderPayload(
                    format!("Stream line is not valid UTF-8: {}", e),
                )));
                return;
            }
        };

        if line.is_empty() {
            self.current_event = None;
            return;
        }

        // SSE comment, used for keep-alives
        if line.starts_with(':') {
            return;
        }

        if let Some(name) = line.strip_prefix("event:") {
            let name = name.trim();
            if name == "end" {
                events.push(ProviderEvent::End);
            }
            self.current_event = Some(name.to_string());
            return;
        }

        if let Some(data) = line.strip_prefix("data:") {
            if let Some(event) = self.decode_data(data.trim()) {
                events.push(event);
            }
            return;
        }

        tracing::debug!(line = %line, "Ignoring unrecognized stream line");
    }

    fn decode_data(&self, data: &str) -> Option<ProviderEvent> {
        if data.is_empty() {
            return None;
        }
        if data == "[DONE]" {
            return Some(ProviderEvent::End);
        }

        let in_error_event = self.current_event.as_deref() == Some("error");

        let payload: YoudaoPayload = match serde_json::from_str(data) {
            Ok(payload) => payload,
            Err(e) if in_error_event => {
                tracing::warn!(error = %e, data = %data, "Unparseable error event payload");
                return Some(ProviderEvent::Failure(TranslateError::ProviderRejected {
                    code: "unknown".to_string(),
                    message: data.to_string(),
                }));
            }
            Err(e) => {
                return Some(ProviderEvent::Failure(TranslateError::ProviderPayload(
                    format!("{} - data was: {}", e, data),
                )));
            }
        };

        if let Some((code, message)) = payload.error() {
            return Some(ProviderEvent::Failure(TranslateError::ProviderRejected {
                code: code.to_string(),
                message: message.to_string(),
            }));
        }

        if in_error_event {
            return Some(ProviderEvent::Failure(TranslateError::ProviderRejected {
                code: "unknown".to_string(),
                message: data.to_string(),
            }));
        }

        // Heartbeats and bookkeeping payloads carry no fragment
        payload
            .fragment()
            .map(|text| ProviderEvent::Fragment(text.to_string()))
    }
}

impl Default for SseLineParser {
    fn default() -> Self {
        Self::new()
    }
}
