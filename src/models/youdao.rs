use serde::{Deserialize, Deserializer, Serialize};

/// One JSON payload from the Youdao LLM translation API
///
/// Streaming mode sends one of these per `data:` line; buffered mode sends a single one.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YoudaoPayload {
    /// Incremental translated text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_incre: Option<String>,

    /// Full translated text so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_full: Option<String>,

    /// "0" on success; the API sends it as a string or a number
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl YoudaoPayload {
    /// Provider-reported error, if any
    pub fn error(&self) -> Option<(&str, &str)> {
        match self.error_code.as_deref() {
            Some(code) if code != "0" => Some((
                code,
                self.error_msg.as_deref().unwrap_or("Unknown error"),
            )),
            _ => None,
        }
    }

    /// Incremental fragment for streaming mode; empty fragments are ignored
    pub fn fragment(&self) -> Option<&str> {
        self.trans_incre.as_deref().filter(|t| !t.is_empty())
    }

    /// Complete text for buffered mode
    pub fn full_text(&self) -> Option<&str> {
        self.trans_full
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.fragment())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_payload() {
        let payload: YoudaoPayload =
            serde_json::from_str(r#"{"transIncre":"你好","transFull":"你好"}"#).unwrap();
        assert_eq!(payload.fragment(), Some("你好"));
        assert!(payload.error().is_none());
    }

    #[test]
    fn test_numeric_error_code() {
        let payload: YoudaoPayload =
            serde_json::from_str(r#"{"errorCode":411,"errorMsg":"rate limited"}"#).unwrap();
        assert_eq!(payload.error(), Some(("411", "rate limited")));
    }

    #[test]
    fn test_zero_error_code_is_success() {
        let payload: YoudaoPayload =
            serde_json::from_str(r#"{"errorCode":"0","transFull":"done"}"#).unwrap();
        assert!(payload.error().is_none());
        assert_eq!(payload.full_text(), Some("done"));
        assert_eq!(payload.fragment(), None);
    }

    #[test]
    fn test_heartbeat_has_no_fragment() {
        let payload: YoudaoPayload = serde_json::from_str(r#"{"transIncre":""}"#).unwrap();
        assert!(payload.fragment().is_none());
        assert!(payload.full_text().is_none());
    }
}
