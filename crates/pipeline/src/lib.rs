//! Speech model backends and audio persistence.
//!
//! The synthesizer and recognizer are external collaborators: they run as
//! model sidecars reached over HTTP/JSON, with stub backends for tests and
//! model-less deployments. Backends are constructed once at startup and
//! shared read-only across requests.

pub mod audio;
pub mod store;
pub mod stt;
pub mod tts;

pub use store::AudioStore;
pub use stt::{create_stt_backend, SidecarSttBackend, SttBackend, StubSttBackend};
pub use tts::{create_tts_backend, SidecarTtsBackend, StubTtsBackend, SynthesizedAudio, TtsBackend};

use thiserror::Error;

/// Errors from the speech pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("synthesis failed: {0}")]
    Synthesis(String),

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error("audio error: {0}")]
    Audio(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}
