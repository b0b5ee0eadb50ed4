//! # Youdao Translate Proxy
//!
//! A translation mediator that picks Youdao LLM-translation parameters from the
//! input text and streams the result back as OpenAI-compatible SSE.
//!
//! ## Overview
//!
//! For every request the proxy:
//! - Classifies the text by subject domain and by style, using keyword scoring
//! - Merges the winning categories' provider options and prompt hints
//! - Resolves the target language and builds an immutable request
//! - Signs and forwards it to Youdao
//! - Re-frames the streamed (or buffered) reply as `data:` chunks ending in
//!   `data: [DONE]`, or a single error event
//!
//! ## Quick Start
//!
//! ```rust
//! use youdao_translate_proxy::classifier::classify;
//! use youdao_translate_proxy::selector::select;
//! use youdao_translate_proxy::taxonomy::Taxonomy;
//! use youdao_translate_proxy::transform::RequestConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let taxonomy = Taxonomy::builtin();
//! let classification = classify(&taxonomy, "The patient's treatment involves gene therapy");
//! assert_eq!(classification.domain_name(), Some("medical"));
//!
//! let request = RequestConfig::build("...", "zh", select(&classification))?;
//! assert_eq!(request.target_lang(), "zh-CHS");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`taxonomy`] - Domain and style categories with their keywords and hints
//! - [`classifier`] - Keyword scoring and winner selection
//! - [`selector`] - Option bundle and prompt merging
//! - [`transform`] - Language resolution, request building and inbound validation
//! - [`streaming`] - Provider SSE decoding and normalized event framing
//! - [`pipeline`] - The end-to-end `pipe` entry point
//! - [`client`] - Youdao HTTP client and request signing
//! - [`handler`] - axum routes

pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod models;
pub mod pipeline;
pub mod provider;
pub mod selector;
pub mod state;
pub mod streaming;
pub mod taxonomy;
pub mod transform;

pub use config::AppConfig;
pub use error::{Result, TranslateError};
