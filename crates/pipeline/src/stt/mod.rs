//! Speech recognition backends.
//!
//! The recognizer is an external collaborator reached over HTTP, mirroring
//! the synthesis side. It works on persisted files: the upload is written to
//! the audio store first and the backend is handed the path.

mod sidecar;

pub use sidecar::SidecarSttBackend;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use kin_speech_config::SttSettings;

use crate::PipelineError;

/// STT backend trait.
#[async_trait]
pub trait SttBackend: Send + Sync {
    /// Recognize speech from a persisted audio file.
    async fn recognize(&self, audio_path: &Path) -> Result<String, PipelineError>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

/// Stub backend for tests and model-less deployments.
#[derive(Default)]
pub struct StubSttBackend {
    canned_text: String,
}

impl StubSttBackend {
    pub fn new() -> Self {
        tracing::warn!("using stub STT backend, no transcription will occur");
        Self::default()
    }

    /// Stub that answers every request with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            canned_text: text.into(),
        }
    }
}

#[async_trait]
impl SttBackend for StubSttBackend {
    async fn recognize(&self, audio_path: &Path) -> Result<String, PipelineError> {
        if !audio_path.exists() {
            return Err(PipelineError::Recognition(format!(
                "audio file not found: {}",
                audio_path.display()
            )));
        }
        Ok(self.canned_text.clone())
    }

    fn name(&self) -> &str {
        "stub-stt"
    }
}

/// Create an STT backend from validated settings.
pub fn create_stt_backend(settings: &SttSettings) -> Arc<dyn SttBackend> {
    match settings.engine.as_str() {
        "sidecar" => {
            tracing::info!(endpoint = %settings.endpoint, "using sidecar STT backend");
            Arc::new(SidecarSttBackend::new(settings))
        }
        other => {
            if other != "stub" {
                tracing::warn!(engine = other, "unknown STT engine, using stub");
            }
            Arc::new(StubSttBackend::new())
        }
    }
}
