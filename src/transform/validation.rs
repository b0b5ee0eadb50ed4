use crate::error::{Result, TranslateError};
use crate::models::chat::ChatRequest;

/// Validate an inbound chat request and return the text to translate
///
/// The text is the last user message; earlier history is ignored.
pub fn extract_user_text(req: &ChatRequest) -> Result<String> {
    if req.messages.is_empty() {
        return Err(TranslateError::InvalidRequest(
            "No messages provided".into(),
        ));
    }

    if let Some(msg) = req
        .messages
        .iter()
        .find(|m| !matches!(m.role.as_str(), "system" | "user" | "assistant"))
    {
        return Err(TranslateError::InvalidRequest(format!(
            "Unknown message role: {}",
            msg.role
        )));
    }

    let text = req
        .messages
        .iter()
        .rev()
        .find(|m| m.role == "user")
        .map(|m| m.content.text())
        .ok_or_else(|| TranslateError::InvalidRequest("No user message provided".into()))?;

    if text.trim().is_empty() {
        return Err(TranslateError::InvalidRequest(
            "User message has no text".into(),
        ));
    }

    Ok(text)
}
