//! Speech synthesis backends.
//!
//! The synthesizer is an external collaborator. The sidecar backend talks to
//! a model server over HTTP/JSON and conditions the voice with a fixed
//! reference sample; the stub returns silence for tests and model-less
//! deployments.

mod sidecar;

pub use sidecar::SidecarTtsBackend;

use std::sync::Arc;

use async_trait::async_trait;

use kin_speech_config::TtsSettings;

use crate::PipelineError;

/// Synthesized audio with the rate the model produced it at.
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

/// TTS backend trait.
#[async_trait]
pub trait TtsBackend: Send + Sync {
    /// Synthesize text to audio.
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, PipelineError>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

/// Stub backend when no model is available (returns silence).
pub struct StubTtsBackend {
    sample_rate: u32,
}

impl StubTtsBackend {
    pub fn new(sample_rate: u32) -> Self {
        tracing::warn!("using stub TTS backend, audio output will be silence");
        Self { sample_rate }
    }
}

#[async_trait]
impl TtsBackend for StubTtsBackend {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, PipelineError> {
        // Silence of plausible length, ~50ms per character.
        let duration_samples = text.chars().count() * (self.sample_rate as usize / 20);
        Ok(SynthesizedAudio {
            samples: vec![0.0f32; duration_samples],
            sample_rate: self.sample_rate,
        })
    }

    fn name(&self) -> &str {
        "stub-tts"
    }
}

/// Create a TTS backend from validated settings.
pub fn create_tts_backend(settings: &TtsSettings) -> Arc<dyn TtsBackend> {
    match settings.engine.as_str() {
        "sidecar" => {
            tracing::info!(endpoint = %settings.endpoint, "using sidecar TTS backend");
            Arc::new(SidecarTtsBackend::new(settings))
        }
        other => {
            if other != "stub" {
                tracing::warn!(engine = other, "unknown TTS engine, using stub");
            }
            Arc::new(StubTtsBackend::new(settings.sample_rate))
        }
    }
}
