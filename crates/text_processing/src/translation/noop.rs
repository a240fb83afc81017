//! Pass-through translator.

use async_trait::async_trait;

use kin_speech_core::{Language, Result, Translator};

/// Returns the input unchanged. Used when translation is disabled and as a
/// harness in tests.
#[derive(Debug, Default)]
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
        Ok(text.to_string())
    }

    fn supports_pair(&self, _from: Language, _to: Language) -> bool {
        true
    }

    fn name(&self) -> &str {
        "noop-translator"
    }
}
