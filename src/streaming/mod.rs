pub mod parser;
pub mod sse;
pub mod translator;

pub use parser::{ProviderEvent, SseLineParser};
pub use sse::{SSEEventGenerator, StreamEvent};
pub use translator::{StreamTranslator, TranslatorState, translate_response};
