//! Shared request-processing state.

use std::sync::Arc;
use std::time::Instant;

use kin_speech_config::ServiceConfig;
use kin_speech_pipeline::{
    create_stt_backend, create_tts_backend, AudioStore, PipelineError, SttBackend, TtsBackend,
};
use kin_speech_text_processing::{create_translator, SpokenTextPipeline};

/// Shared state accessible from axum handlers.
///
/// Every expensive resource here is built once during process start and
/// injected as an immutable handle; requests never reinitialize models.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub synthesizer: Arc<dyn TtsBackend>,
    pub recognizer: Arc<dyn SttBackend>,
    pub text_pipeline: Arc<SpokenTextPipeline>,
    pub store: Arc<AudioStore>,
    pub start_time: Instant,
}

impl AppState {
    /// Build all shared resources from a validated configuration.
    pub fn from_config(config: ServiceConfig) -> Result<Self, PipelineError> {
        let store = Arc::new(AudioStore::open(&config.storage.sounds_dir)?);

        let translator = create_translator(&config.translation);
        let text_pipeline = Arc::new(SpokenTextPipeline::new(
            translator,
            config.translation.source_lang,
            config.translation.target_lang,
        ));

        let synthesizer = create_tts_backend(&config.tts);
        let recognizer = create_stt_backend(&config.stt);

        Ok(Self {
            config: Arc::new(config),
            synthesizer,
            recognizer,
            text_pipeline,
            store,
            start_time: Instant::now(),
        })
    }
}
