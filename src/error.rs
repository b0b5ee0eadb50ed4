use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unsupported target language: {0}")]
    UnsupportedLanguage(String),

    #[error("Provider HTTP error {status}: {body}")]
    ProviderHttp { status: u16, body: String },

    #[error("Provider error {code}: {message}")]
    ProviderRejected { code: String, message: String },

    #[error("Invalid provider payload: {0}")]
    ProviderPayload(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl TranslateError {
    /// Short failure category, used as the `type` of SSE error events
    pub fn kind(&self) -> &'static str {
        match self {
            TranslateError::InvalidRequest(_) => "invalid_request",
            TranslateError::UnsupportedLanguage(_) => "unsupported_language",
            TranslateError::ProviderHttp { .. } => "provider_http_error",
            TranslateError::ProviderRejected { .. } => "provider_error",
            TranslateError::ProviderPayload(_) => "provider_payload_error",
            TranslateError::Transport(_) => "transport_error",
            TranslateError::ConfigError(_) => "config_error",
            TranslateError::InternalError(_) => "internal_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_carries_status_and_body() {
        let err = TranslateError::ProviderHttp {
            status: 500,
            body: "upstream exploded".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("upstream exploded"));
        assert_eq!(err.kind(), "provider_http_error");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            TranslateError::UnsupportedLanguage("xx".into()).kind(),
            "unsupported_language"
        );
        assert_eq!(
            TranslateError::ProviderPayload("bad".into()).kind(),
            "provider_payload_error"
        );
        assert_eq!(
            TranslateError::Transport("reset".into()).kind(),
            "transport_error"
        );
        assert_eq!(
            TranslateError::ConfigError("missing".into()).kind(),
            "config_error"
        );
        assert_eq!(
            TranslateError::InternalError("boom".into()).kind(),
            "internal_error"
        );
    }
}
