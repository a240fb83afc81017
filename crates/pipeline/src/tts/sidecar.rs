//! HTTP/JSON synthesis sidecar client.
//!
//! API format:
//! POST {endpoint}/synthesize
//! Request: `{ "text": "...", "speaker_wav": "conditioning_audio.wav" }`
//! Response: WAV bytes.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use kin_speech_config::TtsSettings;

use crate::audio::decode_wav;
use crate::{PipelineError, TtsBackend};

use super::SynthesizedAudio;

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    speaker_wav: &'a str,
}

pub struct SidecarTtsBackend {
    endpoint: String,
    /// Fixed reference voice conditioning sample, passed on every call.
    speaker_wav: PathBuf,
    client: reqwest::Client,
}

impl SidecarTtsBackend {
    pub fn new(settings: &TtsSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            speaker_wav: settings.speaker_wav.clone(),
            client,
        }
    }
}

#[async_trait]
impl TtsBackend for SidecarTtsBackend {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, PipelineError> {
        let speaker_wav = self.speaker_wav.to_string_lossy();
        let body = SynthesizeRequest {
            text,
            speaker_wav: &speaker_wav,
        };

        let response = self
            .client
            .post(format!("{}/synthesize", self.endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::Synthesis(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PipelineError::Synthesis(format!(
                "model server returned {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PipelineError::Synthesis(e.to_string()))?;

        let (samples, sample_rate) = decode_wav(&bytes)?;
        tracing::debug!(
            chars = text.chars().count(),
            samples = samples.len(),
            sample_rate,
            "synthesis complete"
        );

        Ok(SynthesizedAudio {
            samples,
            sample_rate,
        })
    }

    fn name(&self) -> &str {
        "sidecar-tts"
    }
}
