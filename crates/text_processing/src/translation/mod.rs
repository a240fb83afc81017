//! Translation provider clients.
//!
//! The provider is treated as unreliable: callers fall back per item when a
//! call fails. [`HttpTranslator`] talks JSON to a sidecar service;
//! [`NoopTranslator`] passes text through for tests and model-less
//! deployments.

mod http;
mod noop;

pub use http::{HttpTranslator, HttpTranslatorConfig};
pub use noop::NoopTranslator;

use std::sync::Arc;
use std::time::Duration;

use kin_speech_core::{Language, Translator};
use kin_speech_config::TranslationSettings;

/// Language pairs the sidecar model family handles.
pub fn supported_pairs() -> Vec<(Language, Language)> {
    vec![
        (Language::English, Language::Kinyarwanda),
        (Language::Kinyarwanda, Language::English),
        (Language::English, Language::French),
        (Language::French, Language::English),
        (Language::English, Language::Swahili),
        (Language::Swahili, Language::English),
    ]
}

/// Create a translator from validated settings.
pub fn create_translator(settings: &TranslationSettings) -> Arc<dyn Translator> {
    match settings.provider.as_str() {
        "http" => {
            tracing::info!(endpoint = %settings.endpoint, "using http translator");
            Arc::new(HttpTranslator::new(HttpTranslatorConfig {
                endpoint: settings.endpoint.clone(),
                timeout: Duration::from_millis(settings.timeout_ms),
                ..Default::default()
            }))
        }
        other => {
            // Config validation only admits "http" and "disabled".
            if other != "disabled" {
                tracing::warn!(provider = other, "unknown translation provider, disabling");
            }
            Arc::new(NoopTranslator::new())
        }
    }
}
