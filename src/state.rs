use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::YoudaoConfig;
use crate::error::Result;
use crate::transform::resolve_language;

/// Runtime-adjustable settings: credentials and the default target language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valves {
    pub app_key: String,
    pub app_secret: String,
    pub target_lang: String,
}

impl Valves {
    /// Copy safe to show to clients
    pub fn masked(&self) -> Self {
        Self {
            app_key: self.app_key.clone(),
            app_secret: mask(&self.app_secret),
            target_lang: self.target_lang.clone(),
        }
    }
}

impl From<&YoudaoConfig> for Valves {
    fn from(config: &YoudaoConfig) -> Self {
        Self {
            app_key: config.app_key.clone(),
            app_secret: config.app_secret.clone(),
            target_lang: config.target_lang.clone(),
        }
    }
}

/// Partial update; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValvesUpdate {
    pub app_key: Option<String>,
    pub app_secret: Option<String>,
    pub target_lang: Option<String>,
}

/// Shared settings handle
///
/// Readers take a snapshot without locking; an in-flight request keeps the
/// snapshot it started with even if an update lands meanwhile.
#[derive(Clone)]
pub struct SharedValves {
    inner: Arc<ArcSwap<Valves>>,
}

impl SharedValves {
    pub fn new(valves: Valves) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(valves)),
        }
    }

    pub fn load(&self) -> Arc<Valves> {
        self.inner.load_full()
    }

    /// Apply an update atomically. An unsupported target language is rejected
    /// and leaves the current settings untouched.
    pub fn update(&self, update: ValvesUpdate) -> Result<Arc<Valves>> {
        if let Some(lang) = &update.target_lang {
            resolve_language(lang)?;
        }

        self.inner.rcu(|current| {
            let mut next = (**current).clone();
            if let Some(app_key) = &update.app_key {
                next.app_key = app_key.clone();
            }
            if let Some(app_secret) = &update.app_secret {
                next.app_secret = app_secret.clone();
            }
            if let Some(target_lang) = &update.target_lang {
                next.target_lang = target_lang.clone();
            }
            next
        });

        let valves = self.load();
        tracing::info!(
            target_lang = %valves.target_lang,
            app_key_set = !valves.app_key.is_empty(),
            "Valves updated"
        );
        Ok(valves)
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "*".repeat(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslateError;

    fn make_valves() -> Valves {
        Valves {
            app_key: "key".to_string(),
            app_secret: "secret".to_string(),
            target_lang: "zh".to_string(),
        }
    }

    #[test]
    fn test_partial_update() {
        let shared = SharedValves::new(make_valves());
        let updated = shared
            .update(ValvesUpdate {
                target_lang: Some("ja".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.target_lang, "ja");
        assert_eq!(updated.app_key, "key");
        assert_eq!(shared.load().target_lang, "ja");
    }

    #[test]
    fn test_snapshot_unaffected_by_update() {
        let shared = SharedValves::new(make_valves());
        let snapshot = shared.load();

        shared
            .update(ValvesUpdate {
                app_key: Some("rotated".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(snapshot.app_key, "key");
        assert_eq!(shared.load().app_key, "rotated");
    }

    #[test]
    fn test_invalid_language_rejected() {
        let shared = SharedValves::new(make_valves());
        let err = shared
            .update(ValvesUpdate {
                target_lang: Some("xx".to_string()),
                app_key: Some("other".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, TranslateError::UnsupportedLanguage(_)));
        assert_eq!(*shared.load(), make_valves());
    }

    #[test]
    fn test_masked_hides_secret() {
        let masked = make_valves().masked();
        assert_eq!(masked.app_key, "key");
        assert_ne!(masked.app_secret, "secret");

        let mut empty = make_valves();
        empty.app_secret.clear();
        assert_eq!(empty.masked().app_secret, "");
    }
}
