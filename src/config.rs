use crate::error::{Result, TranslateError};
use crate::transform::resolve_language;
use serde::Deserialize;
use std::env;
use std::fs;

pub const DEFAULT_ENDPOINT: &str = "https://openapi.youdao.com/llm_trans";
pub const DEFAULT_TARGET_LANG: &str = "zh";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub youdao: YoudaoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YoudaoConfig {
    #[serde(default)]
    pub app_key: String,
    #[serde(default)]
    pub app_secret: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_target_lang() -> String {
    DEFAULT_TARGET_LANG.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("PROXY_LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let app_key = env::var("YOUDAO_APP_KEY").unwrap_or_default();
        let app_secret = env::var("YOUDAO_APP_SECRET").unwrap_or_default();

        let target_lang =
            env::var("YOUDAO_TARGET_LANG").unwrap_or_else(|_| default_target_lang());

        let endpoint = env::var("YOUDAO_ENDPOINT").unwrap_or_else(|_| default_endpoint());

        Ok(AppConfig {
            server: ServerConfig { listen_addr },
            youdao: YoudaoConfig {
                app_key,
                app_secret,
                target_lang,
                endpoint,
            },
        })
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            TranslateError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml(&contents)?;
        Ok(config.with_overrides(|key| env::var(key).ok()))
    }

    /// Apply `YOUDAO_APP_KEY`, `YOUDAO_APP_SECRET` and `YOUDAO_TARGET_LANG`
    /// on top of file settings
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(app_key) = lookup("YOUDAO_APP_KEY") {
            self.youdao.app_key = app_key;
        }
        if let Some(app_secret) = lookup("YOUDAO_APP_SECRET") {
            self.youdao.app_secret = app_secret;
        }
        if let Some(target_lang) = lookup("YOUDAO_TARGET_LANG") {
            self.youdao.target_lang = target_lang;
        }
        self
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| TranslateError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.listen_addr.is_empty() {
            return Err(TranslateError::ConfigError(
                "Listen address is empty".to_string(),
            ));
        }

        if self.youdao.endpoint.is_empty() {
            return Err(TranslateError::ConfigError("Endpoint is empty".to_string()));
        }

        resolve_language(&self.youdao.target_lang).map_err(|e| {
            TranslateError::ConfigError(format!("Invalid default target language: {}", e))
        })?;

        // Credentials may arrive later through the valves endpoint
        if self.youdao.app_key.is_empty() || self.youdao.app_secret.is_empty() {
            tracing::warn!("Youdao app key or secret is empty; requests will be rejected upstream");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                listen_addr: "127.0.0.1:8080".to_string(),
            },
            youdao: YoudaoConfig {
                app_key: "key".to_string(),
                app_secret: "secret".to_string(),
                target_lang: "zh".to_string(),
                endpoint: DEFAULT_ENDPOINT.to_string(),
            },
        }
    }

    #[test]
    fn test_config_validation() {
        let valid_config = make_config();
        assert!(valid_config.validate().is_ok());

        let mut no_endpoint = make_config();
        no_endpoint.youdao.endpoint.clear();
        assert!(no_endpoint.validate().is_err());

        let mut bad_lang = make_config();
        bad_lang.youdao.target_lang = "xx".to_string();
        let err = bad_lang.validate().unwrap_err();
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_missing_credentials_are_allowed() {
        let mut config = make_config();
        config.youdao.app_key.clear();
        config.youdao.app_secret.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [server]

            [youdao]
            app_key = "k"
            app_secret = "s"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.youdao.target_lang, "zh");
        assert_eq!(config.youdao.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.youdao.app_key, "k");
    }

    #[test]
    fn test_env_overrides_file_settings() {
        let file = AppConfig::from_toml(
            r#"
            [server]

            [youdao]
            app_key = "file-key"
            app_secret = "file-secret"
            target_lang = "en"
            "#,
        )
        .unwrap();

        let config = file.with_overrides(|key| match key {
            "YOUDAO_APP_KEY" => Some("env-key".to_string()),
            "YOUDAO_TARGET_LANG" => Some("ja".to_string()),
            _ => None,
        });

        assert_eq!(config.youdao.app_key, "env-key");
        assert_eq!(config.youdao.app_secret, "file-secret");
        assert_eq!(config.youdao.target_lang, "ja");
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = AppConfig::from_toml("not = [valid").unwrap_err();
        assert!(matches!(err, TranslateError::ConfigError(_)));
    }
}
