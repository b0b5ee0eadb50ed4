use bytes::Bytes;
use futures::Stream;
use std::future::Future;
use std::pin::Pin;

use crate::error::Result;
use crate::transform::RequestConfig;

/// Type alias for an incremental response body from a provider
pub type ProviderStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Type alias for the future returned by translate
pub type ProviderFuture = Pin<Box<dyn Future<Output = Result<ProviderResponse>> + Send>>;

/// Raw provider response, before normalization
pub enum ProviderResponse {
    /// Line-delimited incremental body (SSE mode)
    Streaming(ProviderStream),
    /// Complete body holding a single JSON object
    Buffered(Bytes),
}

impl std::fmt::Debug for ProviderResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderResponse::Streaming(_) => f.write_str("ProviderResponse::Streaming(..)"),
            ProviderResponse::Buffered(body) => f
                .debug_tuple("ProviderResponse::Buffered")
                .field(&body.len())
                .finish(),
        }
    }
}

/// Trait for translation backends
pub trait Provider: Send + Sync {
    /// Send a prepared translation request
    ///
    /// # Arguments
    /// * `request` - The resolved request configuration
    ///
    /// # Returns
    /// The raw response; HTTP and transport failures come back as `Err`
    fn translate(&self, request: &RequestConfig) -> ProviderFuture;

    /// Get the provider name for logging
    fn name(&self) -> &str;
}
