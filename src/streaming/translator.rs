use futures::{Stream, StreamExt};
use tracing::{debug, info, warn};

use crate::error::{Result, TranslateError};
use crate::models::youdao::YoudaoPayload;
use crate::provider::ProviderResponse;

use super::parser::{ProviderEvent, SseLineParser};
use super::sse::StreamEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorState {
    Idle,
    Streaming,
    Completed,
    Failed,
}

/// Turns one provider response into a normalized event sequence
///
/// Emits zero or more chunks followed by exactly one `Done` or `Error`.
/// Once terminal, every method returns no events.
pub struct StreamTranslator {
    state: TranslatorState,
    parser: SseLineParser,
    chunks_emitted: usize,
}

impl StreamTranslator {
    pub fn new() -> Self {
        Self {
            state: TranslatorState::Idle,
            parser: SseLineParser::new(),
            chunks_emitted: 0,
        }
    }

    pub fn state(&self) -> TranslatorState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            TranslatorState::Completed | TranslatorState::Failed
        )
    }

    pub fn chunks_emitted(&self) -> usize {
        self.chunks_emitted
    }

    /// Feed a piece of an incremental body
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<StreamEvent> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.state = TranslatorState::Streaming;

        let decoded = self.parser.feed(bytes);
        self.apply(decoded)
    }

    /// Body exhausted normally
    pub fn finish(&mut self) -> Vec<StreamEvent> {
        if self.is_terminal() {
            return Vec::new();
        }

        let decoded = self.parser.finish();
        let mut events = self.apply(decoded);
        if !self.is_terminal() {
            events.push(self.complete());
        }
        events
    }

    /// Transport, HTTP or decoding failure
    pub fn fail(&mut self, err: &TranslateError) -> Vec<StreamEvent> {
        if self.is_terminal() {
            return Vec::new();
        }
        vec![self.failed(err)]
    }

    /// A fully buffered response: one JSON object, one chunk at most
    pub fn complete_buffered(&mut self, body: &[u8]) -> Vec<StreamEvent> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.state = TranslatorState::Streaming;

        let payload: YoudaoPayload = match serde_json::from_slice(body) {
            Ok(payload) => payload,
            Err(e) => {
                let err = TranslateError::ProviderPayload(format!(
                    "{} - body was: {}",
                    e,
                    String::from_utf8_lossy(body)
                ));
                return vec![self.failed(&err)];
            }
        };

        if let Some((code, message)) = payload.error() {
            let err = TranslateError::ProviderRejected {
                code: code.to_string(),
                message: message.to_string(),
            };
            return vec![self.failed(&err)];
        }

        let mut events = Vec::with_capacity(2);
        if let Some(text) = payload.full_text() {
            self.chunks_emitted += 1;
            events.push(StreamEvent::Chunk(text.to_string()));
        }
        events.push(self.complete());
        events
    }

    fn apply(&mut self, decoded: Vec<ProviderEvent>) -> Vec<StreamEvent> {
        let mut events = Vec::with_capacity(decoded.len());
        for event in decoded {
            match event {
                ProviderEvent::Fragment(text) => {
                    self.chunks_emitted += 1;
                    events.push(StreamEvent::Chunk(text));
                }
                ProviderEvent::End => {
                    events.push(self.complete());
                    break;
                }
                ProviderEvent::Failure(err) => {
                    events.push(self.failed(&err));
                    break;
                }
            }
        }
        events
    }

    fn complete(&mut self) -> StreamEvent {
        self.state = TranslatorState::Completed;
        debug!(chunks = self.chunks_emitted, "Translation stream completed");
        StreamEvent::Done
    }

    fn failed(&mut self, err: &TranslateError) -> StreamEvent {
        self.state = TranslatorState::Failed;
        warn!(
            kind = err.kind(),
            chunks = self.chunks_emitted,
            "Translation stream failed: {}",
            err
        );
        StreamEvent::error(err)
    }
}

impl Default for StreamTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazily translate a provider response into normalized events
///
/// The consumer drives the upstream body. Dropping the returned stream drops the
/// body and releases the connection, whether or not it was fully read.
pub fn translate_response(
    response: Result<ProviderResponse>,
) -> impl Stream<Item = StreamEvent> + Send + 'static {
    async_stream::stream! {
        let mut translator = StreamTranslator::new();

        match response {
            Err(err) => {
                for event in translator.fail(&err) {
                    yield event;
                }
            }
            Ok(ProviderResponse::Buffered(body)) => {
                info!(bytes = body.len(), "Translating buffered provider response");
                for event in translator.complete_buffered(&body) {
                    yield event;
                }
            }
            Ok(ProviderResponse::Streaming(mut body)) => {
                while let Some(item) = body.next().await {
                    let events = match item {
                        Ok(bytes) => translator.feed(&bytes),
                        Err(err) => translator.fail(&err),
                    };
                    for event in events {
                        yield event;
                    }
                    if translator.is_terminal() {
                        break;
                    }
                }
                drop(body);

                for event in translator.finish() {
                    yield event;
                }
            }
        }
    }
}
