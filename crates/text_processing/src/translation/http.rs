//! HTTP/JSON translation sidecar client.
//!
//! API format:
//! POST {endpoint}/translate
//! Request: `{ "text": "...", "from": "en", "to": "rw" }`
//! Response: `{ "translation": "..." }`

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use kin_speech_core::{CoreError, Language, Result, Translator};

use super::supported_pairs;

/// HTTP translator configuration.
#[derive(Debug, Clone)]
pub struct HttpTranslatorConfig {
    /// Endpoint URL (http://host:port).
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Enable caching.
    pub cache_enabled: bool,
    /// Max cache entries.
    pub cache_size: usize,
}

impl Default for HttpTranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:50051".to_string(),
            timeout: Duration::from_secs(10),
            cache_enabled: true,
            cache_size: 1000,
        }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    from: &'a str,
    to: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    translation: String,
}

/// Bounded cache; spelled-out numbers repeat constantly across requests.
struct TranslationCache {
    entries: HashMap<String, String>,
    max_size: usize,
}

impl TranslationCache {
    fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_size,
        }
    }

    fn make_key(text: &str, from: Language, to: Language) -> String {
        format!("{from}:{to}:{text}")
    }

    fn get(&self, text: &str, from: Language, to: Language) -> Option<&str> {
        self.entries
            .get(&Self::make_key(text, from, to))
            .map(String::as_str)
    }

    fn insert(&mut self, text: &str, from: Language, to: Language, translation: String) {
        // Simple eviction: clear half when full.
        if self.entries.len() >= self.max_size {
            let keys_to_remove: Vec<_> = self
                .entries
                .keys()
                .take(self.max_size / 2)
                .cloned()
                .collect();
            for key in keys_to_remove {
                self.entries.remove(&key);
            }
        }
        self.entries
            .insert(Self::make_key(text, from, to), translation);
    }
}

/// Translation sidecar client.
pub struct HttpTranslator {
    config: HttpTranslatorConfig,
    client: reqwest::Client,
    cache: RwLock<TranslationCache>,
}

impl HttpTranslator {
    pub fn new(config: HttpTranslatorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        let cache = RwLock::new(TranslationCache::new(config.cache_size));

        Self {
            config,
            client,
            cache,
        }
    }

    async fn call_service(&self, text: &str, from: Language, to: Language) -> Result<String> {
        let url = format!("{}/translate", self.config.endpoint.trim_end_matches('/'));
        let body = TranslateRequest {
            text,
            from: from.code(),
            to: to.code(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoreError::Translation(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CoreError::Translation(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| CoreError::Translation(e.to_string()))?;

        Ok(parsed.translation)
    }

    async fn translate_with_cache(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String> {
        if self.config.cache_enabled {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.get(text, from, to) {
                tracing::trace!("translation cache hit");
                return Ok(cached.to_string());
            }
        }

        let translation = self.call_service(text, from, to).await?;

        if self.config.cache_enabled {
            let mut cache = self.cache.write().await;
            cache.insert(text, from, to, translation.clone());
        }

        Ok(translation)
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        if from == to {
            return Ok(text.to_string());
        }

        if !self.supports_pair(from, to) {
            tracing::warn!(%from, %to, "translation pair not supported, passing through");
            return Ok(text.to_string());
        }

        self.translate_with_cache(text, from, to).await
    }

    fn supports_pair(&self, from: Language, to: Language) -> bool {
        supported_pairs().contains(&(from, to))
    }

    fn name(&self) -> &str {
        "http-translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default() {
        let config = HttpTranslatorConfig::default();
        assert_eq!(config.endpoint, "http://localhost:50051");
        assert!(config.cache_enabled);
    }

    #[tokio::test]
    async fn same_language_passthrough() {
        let translator = HttpTranslator::new(HttpTranslatorConfig::default());
        let result = translator
            .translate("three", Language::English, Language::English)
            .await
            .unwrap();
        assert_eq!(result, "three");
    }

    #[tokio::test]
    async fn unsupported_pair_passes_through() {
        let translator = HttpTranslator::new(HttpTranslatorConfig::default());
        // rw -> fr is not in the supported set; no network call is made.
        let result = translator
            .translate("gatatu", Language::Kinyarwanda, Language::French)
            .await
            .unwrap();
        assert_eq!(result, "gatatu");
    }

    #[test]
    fn cache_evicts_when_full() {
        let mut cache = TranslationCache::new(4);
        for i in 0..4 {
            cache.insert(
                &format!("w{i}"),
                Language::English,
                Language::Kinyarwanda,
                format!("t{i}"),
            );
        }
        cache.insert("w4", Language::English, Language::Kinyarwanda, "t4".into());
        assert!(cache.entries.len() <= 4);
        assert_eq!(
            cache.get("w4", Language::English, Language::Kinyarwanda),
            Some("t4")
        );
    }
}
