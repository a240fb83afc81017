//! Text pre-processing for speech synthesis.
//!
//! The synthesis model cannot pronounce digits, so embedded numerals are
//! rewritten into their spoken Kinyarwanda form before the text reaches it.
//! The rewrite is a three-pass pipeline:
//!
//! 1. [`extract_numerals`] swaps every standalone digit run for a `{NUM<k>}`
//!    placeholder and spells the number out in the source language;
//! 2. [`translate_placeholders`] translates each spelled-out word through the
//!    (unreliable) provider, falling back per entry on failure;
//! 3. [`substitute_placeholders`] writes the translated words back into the
//!    text.
//!
//! [`SpokenTextPipeline`] composes the three passes behind one call.

mod numerals;
mod pipeline;
mod spell;
pub mod translation;

pub use numerals::{extract_numerals, substitute_placeholders, PlaceholderMap};
pub use pipeline::SpokenTextPipeline;
pub use spell::spell_out;
pub use translation::{create_translator, HttpTranslator, NoopTranslator};

use kin_speech_core::{Language, Translator};

/// Translate every entry of a placeholder map, independently.
///
/// A provider failure for one entry never aborts the others: the failing
/// entry keeps its untranslated spelled-out word and the error is logged.
/// The returned map always carries the same keys as the input.
pub async fn translate_placeholders(
    map: &PlaceholderMap,
    translator: &dyn Translator,
    from: Language,
    to: Language,
) -> PlaceholderMap {
    let mut translated = PlaceholderMap::default();

    for (token, word) in map.iter() {
        let value = match translator.translate(word, from, to).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    provider = translator.name(),
                    word = %word,
                    error = %e,
                    "translation failed, keeping untranslated word"
                );
                word.clone()
            }
        };
        translated.insert(token.clone(), value);
    }

    translated
}
