use bytes::Bytes;
use futures::{Stream, StreamExt, stream};
use std::sync::Arc;
use tracing::{error, info};

use crate::classifier::classify;
use crate::models::chat::ChatMessage;
use crate::provider::Provider;
use crate::selector::select;
use crate::state::SharedValves;
use crate::streaming::{SSEEventGenerator, StreamEvent, translate_response};
use crate::taxonomy::Taxonomy;
use crate::transform::RequestConfig;

/// Model identifier advertised to chat front-ends
pub const PIPELINE_MODEL_ID: &str = "youdao-translate";
pub const PIPELINE_MODEL_NAME: &str = "LLM Model";

/// Per-request knobs that travel alongside the chat payload
#[derive(Debug, Clone, Default)]
pub struct PipeOptions {
    /// Overrides the configured default target language
    pub target_lang: Option<String>,
}

/// Classify → select → build → send → translate, for one request at a time
#[derive(Clone)]
pub struct TranslatePipeline {
    taxonomy: Arc<Taxonomy>,
    provider: Arc<dyn Provider>,
    valves: SharedValves,
}

impl TranslatePipeline {
    pub fn new(
        taxonomy: Arc<Taxonomy>,
        provider: Arc<dyn Provider>,
        valves: SharedValves,
    ) -> Self {
        Self {
            taxonomy,
            provider,
            valves,
        }
    }

    pub fn valves(&self) -> &SharedValves {
        &self.valves
    }

    /// Build the request and start the provider call, yielding normalized events
    ///
    /// `messages` is accepted for chat-host compatibility and not used for translation.
    pub fn events(
        &self,
        user_text: &str,
        model_id: &str,
        messages: &[ChatMessage],
        options: &PipeOptions,
    ) -> impl Stream<Item = StreamEvent> + Send + use<> {
        let target_lang = options
            .target_lang
            .clone()
            .unwrap_or_else(|| self.valves.load().target_lang.clone());

        let classification = classify(&self.taxonomy, user_text);
        info!(
            model = model_id,
            history = messages.len(),
            domain = classification.domain_name().unwrap_or("none"),
            style = classification.style_name().unwrap_or("none"),
            target_lang = %target_lang,
            "Translating with {}",
            self.provider.name()
        );

        let selection = select(&classification);
        let request = match RequestConfig::build(user_text, &target_lang, selection) {
            Ok(request) => request,
            Err(e) => {
                error!("Request build failed: {}", e);
                return stream::iter(vec![StreamEvent::error(&e)]).left_stream();
            }
        };

        let response = self.provider.translate(&request);
        stream::once(response)
            .flat_map(translate_response)
            .right_stream()
    }

    /// Same as [`events`](Self::events), framed as SSE bytes
    pub fn pipe(
        &self,
        user_text: &str,
        model_id: &str,
        messages: &[ChatMessage],
        options: &PipeOptions,
    ) -> impl Stream<Item = Bytes> + Send + use<> {
        let generator = SSEEventGenerator::new(model_id.to_string());
        self.events(user_text, model_id, messages, options)
            .map(move |event| Bytes::from(generator.format(&event)))
    }
}
