//! Core traits and types shared across the speech service crates.
//!
//! This crate holds the seams between components: the [`Translator`] trait
//! implemented by provider clients in `text_processing`, the [`Language`]
//! codes the service speaks, and the per-request result types produced by the
//! synthesis and recognition paths.

mod error;
mod language;
mod types;

pub use error::{CoreError, Result};
pub use language::Language;
pub use types::{GenerationResult, TranscriptionResult};

use async_trait::async_trait;

/// Translation provider seam.
///
/// Implementations are expected to be unreliable: callers treat any error as
/// a per-item failure and fall back to the untranslated text.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from one language to another.
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;

    /// Whether this provider can handle the given pair.
    fn supports_pair(&self, from: Language, to: Language) -> bool;

    /// Provider name for logging.
    fn name(&self) -> &str;
}
