//! Composed spoken-text pipeline.

use std::sync::Arc;

use kin_speech_core::{Language, Translator};

use crate::{extract_numerals, substitute_placeholders, translate_placeholders};

/// Extract -> translate -> substitute, behind one call.
///
/// The pipeline never fails: translation falls back per entry, and text
/// without numerals passes through untouched.
pub struct SpokenTextPipeline {
    translator: Arc<dyn Translator>,
    source: Language,
    target: Language,
}

impl SpokenTextPipeline {
    pub fn new(translator: Arc<dyn Translator>, source: Language, target: Language) -> Self {
        Self {
            translator,
            source,
            target,
        }
    }

    /// Rewrite embedded numerals into their spoken form in the target
    /// language.
    pub async fn prepare(&self, text: &str) -> String {
        let (with_placeholders, map) = extract_numerals(text);
        if map.is_empty() {
            return with_placeholders;
        }

        tracing::debug!(numerals = map.len(), "rewriting numerals for synthesis");

        let translated =
            translate_placeholders(&map, self.translator.as_ref(), self.source, self.target).await;
        substitute_placeholders(&with_placeholders, &translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoopTranslator;

    use async_trait::async_trait;
    use kin_speech_core::{CoreError, Result};
    use parking_lot::Mutex;

    /// Fails for configured words, counts calls; everything else gets a
    /// `rw:` prefix so tests can tell translated from fallback values.
    struct FlakyTranslator {
        fail_on: Vec<String>,
        calls: Mutex<usize>,
    }

    impl FlakyTranslator {
        fn new(fail_on: &[&str]) -> Self {
            Self {
                fail_on: fail_on.iter().map(|s| s.to_string()).collect(),
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl Translator for FlakyTranslator {
        async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
            *self.calls.lock() += 1;
            if self.fail_on.iter().any(|w| w == text) {
                Err(CoreError::Translation("rate limited".into()))
            } else {
                Ok(format!("rw:{text}"))
            }
        }

        fn supports_pair(&self, _from: Language, _to: Language) -> bool {
            true
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    fn pipeline(translator: Arc<dyn Translator>) -> SpokenTextPipeline {
        SpokenTextPipeline::new(translator, Language::English, Language::Kinyarwanda)
    }

    #[tokio::test]
    async fn text_without_numerals_is_untouched() {
        let translator = Arc::new(FlakyTranslator::new(&[]));
        let out = pipeline(translator.clone()).prepare("murakoze cyane").await;
        assert_eq!(out, "murakoze cyane");
        assert_eq!(*translator.calls.lock(), 0);
    }

    #[tokio::test]
    async fn numerals_are_translated_into_the_text() {
        let translator = Arc::new(FlakyTranslator::new(&[]));
        let out = pipeline(translator)
            .prepare("I have 3 apples and 12 oranges")
            .await;
        assert_eq!(out, "I have rw:three apples and rw:twelve oranges");
    }

    #[tokio::test]
    async fn one_failing_entry_does_not_abort_the_others() {
        let translator = Arc::new(FlakyTranslator::new(&["twelve"]));
        let out = pipeline(translator.clone())
            .prepare("I have 3 apples and 12 oranges")
            .await;
        // The failing entry falls back to its spelled-out form.
        assert_eq!(out, "I have rw:three apples and twelve oranges");
        assert_eq!(*translator.calls.lock(), 2);
    }

    #[tokio::test]
    async fn translated_map_keeps_all_keys_on_failure() {
        let translator = FlakyTranslator::new(&["three"]);
        let (_, map) = extract_numerals("3 apples, 12 oranges");
        let translated = translate_placeholders(
            &map,
            &translator,
            Language::English,
            Language::Kinyarwanda,
        )
        .await;
        assert_eq!(translated.len(), map.len());
        assert_eq!(translated.get("{NUM1}"), Some("three"));
        assert_eq!(translated.get("{NUM2}"), Some("rw:twelve"));
    }

    #[tokio::test]
    async fn identity_translation_leaves_no_tokens() {
        let translator = Arc::new(NoopTranslator::new());
        let out = pipeline(translator).prepare("call me at 7 or 19").await;
        assert!(!out.contains("{NUM"));
        assert_eq!(out, "call me at seven or nineteen");
    }
}
