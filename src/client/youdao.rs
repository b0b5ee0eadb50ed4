use bytes::Bytes;
use futures::StreamExt;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::error::{Result, TranslateError};
use crate::provider::{Provider, ProviderFuture, ProviderResponse};
use crate::state::SharedValves;
use crate::transform::RequestConfig;

pub struct YoudaoClient {
    client: Client,
    endpoint: String,
    valves: SharedValves,
}

impl YoudaoClient {
    pub fn new(endpoint: String, valves: SharedValves) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| {
                TranslateError::InternalError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint,
            valves,
        })
    }
}

impl Provider for YoudaoClient {
    fn translate(&self, request: &RequestConfig) -> ProviderFuture {
        let valves = self.valves.load();
        let mut form = request.form_fields();
        form.extend(sign_fields(
            &valves.app_key,
            &valves.app_secret,
            request.source_text(),
            &uuid::Uuid::new_v4().to_string(),
            chrono::Utc::now().timestamp(),
        ));

        let url = self.endpoint.clone();
        let client = self.client.clone();

        Box::pin(async move { Self::translate_impl(url, form, client).await })
    }

    fn name(&self) -> &str {
        "Youdao"
    }
}

impl YoudaoClient {
    async fn translate_impl(
        url: String,
        form: Vec<(String, String)>,
        client: Client,
    ) -> Result<ProviderResponse> {
        info!("Youdao: Sending {} form fields to: {}", form.len(), url);

        let response = client
            .post(&url)
            .header(ACCEPT, "text/event-stream")
            .form(&form)
            .send()
            .await
            .map_err(|e| TranslateError::Transport(format!("Youdao request failed: {}", e)))?;

        let status = response.status();
        info!("Youdao responded with status: {}", status);

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "Youdao API error: {}", error_body);
            return Err(TranslateError::ProviderHttp {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let is_event_stream = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/event-stream"));

        if is_event_stream {
            let body = response
                .bytes_stream()
                .map(|chunk| chunk.map_err(|e| TranslateError::Transport(e.to_string())));
            Ok(ProviderResponse::Streaming(Box::pin(body)))
        } else {
            let body: Bytes = response
                .bytes()
                .await
                .map_err(|e| TranslateError::Transport(e.to_string()))?;
            Ok(ProviderResponse::Buffered(body))
        }
    }
}

/// Youdao v3 signature fields
pub fn sign_fields(
    app_key: &str,
    app_secret: &str,
    query: &str,
    salt: &str,
    curtime: i64,
) -> Vec<(String, String)> {
    let curtime = curtime.to_string();

    let mut hasher = Sha256::new();
    hasher.update(app_key.as_bytes());
    hasher.update(truncate(query).as_bytes());
    hasher.update(salt.as_bytes());
    hasher.update(curtime.as_bytes());
    hasher.update(app_secret.as_bytes());
    let sign = format!("{:x}", hasher.finalize());

    vec![
        ("salt".to_string(), salt.to_string()),
        ("sign".to_string(), sign),
        ("signType".to_string(), "v3".to_string()),
        ("curtime".to_string(), curtime),
        ("appKey".to_string(), app_key.to_string()),
    ]
}

/// Signature input for the query: short queries as-is, long ones as
/// first 10 chars + char count + last 10 chars
pub fn truncate(query: &str) -> String {
    let chars: Vec<char> = query.chars().collect();
    let size = chars.len();
    if size <= 20 {
        return query.to_string();
    }

    let head: String = chars[..10].iter().collect();
    let tail: String = chars[size - 10..].iter().collect();
    format!("{}{}{}", head, size, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(fields: &'a [(String, String)], key: &str) -> &'a str {
        fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_truncate_short_query() {
        assert_eq!(truncate(""), "");
        assert_eq!(truncate("hello"), "hello");
        assert_eq!(truncate("exactly twenty chars"), "exactly twenty chars");
    }

    #[test]
    fn test_truncate_long_query() {
        let query = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(truncate(query), "abcdefghij26qrstuvwxyz");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let query = "一二三四五六七八九十甲乙丙丁戊己庚辛壬癸子";
        assert_eq!(query.chars().count(), 21);
        assert_eq!(truncate(query), "一二三四五六七八九十21乙丙丁戊己庚辛壬癸子");
    }

    #[test]
    fn test_sign_fields() {
        let fields = sign_fields("key", "secret", "hello", "salt-1", 1_700_000_000);

        assert_eq!(field(&fields, "salt"), "salt-1");
        assert_eq!(field(&fields, "signType"), "v3");
        assert_eq!(field(&fields, "curtime"), "1700000000");
        assert_eq!(field(&fields, "appKey"), "key");

        let mut hasher = Sha256::new();
        hasher.update(b"keyhellosalt-11700000000secret");
        let expected = format!("{:x}", hasher.finalize());
        assert_eq!(field(&fields, "sign"), expected);
        assert_eq!(expected.len(), 64);
    }

    #[test]
    fn test_signature_depends_on_secret() {
        let a = sign_fields("key", "secret-a", "hello", "salt", 1);
        let b = sign_fields("key", "secret-b", "hello", "salt", 1);
        assert_ne!(field(&a, "sign"), field(&b, "sign"));
    }
}
