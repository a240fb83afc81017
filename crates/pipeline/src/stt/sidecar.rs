//! HTTP recognition sidecar client.
//!
//! API format:
//! POST {endpoint}/recognize (body: WAV bytes)
//! Response: `{ "text": "..." }`

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use kin_speech_config::SttSettings;

use crate::{PipelineError, SttBackend};

#[derive(Deserialize)]
struct RecognizeResponse {
    text: String,
}

pub struct SidecarSttBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl SidecarSttBackend {
    pub fn new(settings: &SttSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl SttBackend for SidecarSttBackend {
    async fn recognize(&self, audio_path: &Path) -> Result<String, PipelineError> {
        let bytes = tokio::fs::read(audio_path)
            .await
            .map_err(|e| PipelineError::Recognition(format!("reading audio file: {e}")))?;

        let response = self
            .client
            .post(format!("{}/recognize", self.endpoint))
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .map_err(|e| PipelineError::Recognition(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PipelineError::Recognition(format!(
                "model server returned {}",
                response.status()
            )));
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::Recognition(e.to_string()))?;

        tracing::debug!(chars = parsed.text.chars().count(), "recognition complete");
        Ok(parsed.text)
    }

    fn name(&self) -> &str {
        "sidecar-stt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_a_recognition_error() {
        let backend = SidecarSttBackend::new(&SttSettings::default());
        let err = backend
            .recognize(Path::new("/nonexistent/sound.wav"))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Recognition(_)));
    }
}
