//! Request handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use kin_speech_core::{GenerationResult, TranscriptionResult};

use crate::error::ApiError;
use crate::state::AppState;

/// Truncation notices surface through this response header so the audio body
/// stays a plain WAV stream.
pub const GENERATION_NOTE_HEADER: &str = "x-generation-note";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
    pub stats: u32,
}

pub async fn root() -> Redirect {
    Redirect::temporary("/docs")
}

pub async fn docs() -> Html<&'static str> {
    Html(include_str!("docs.html"))
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "tts": state.synthesizer.name(),
        "stt": state.recognizer.name(),
    }))
}

/// `POST /generate`: synthesize speech from text.
///
/// Over-long input is cut at the configured character limit rather than
/// rejected; the notice travels in the [`GENERATION_NOTE_HEADER`] header.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let max_chars = state.config.text.max_chars;
    let char_count = request.text.chars().count();

    let (text, note) = if char_count > max_chars {
        let cut: String = request.text.chars().take(max_chars).collect();
        tracing::warn!(chars = char_count, limit = max_chars, "input text truncated");
        let note = format!(
            "Input text was cut off since it went over the {max_chars} character limit."
        );
        (cut, Some(note))
    } else {
        (request.text, None)
    };

    let spoken = state.text_pipeline.prepare(&text).await;
    tracing::debug!(chars = spoken.chars().count(), "synthesizing prepared text");

    let audio = state
        .synthesizer
        .synthesize(&spoken)
        .await
        .map_err(ApiError::Synthesis)?;
    let (path, bytes) = state
        .store
        .persist_samples(&audio.samples, audio.sample_rate)
        .await
        .map_err(ApiError::Synthesis)?;

    let mut result = GenerationResult::new(bytes, path);
    if let Some(note) = note {
        result = result.with_truncation(note);
    }
    tracing::info!(
        path = %result.file_path.display(),
        bytes = result.audio.len(),
        truncated = result.truncated,
        created_at = %result.created_at,
        "generated audio"
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"audio.wav\""),
    );
    if let Some(note) = &result.note {
        if let Ok(value) = HeaderValue::from_str(note) {
            headers.insert(GENERATION_NOTE_HEADER, value);
        }
    }

    Ok((StatusCode::OK, headers, result.audio))
}

/// `POST /transcribe`: recognize speech from uploaded audio bytes.
///
/// The upload is persisted first so the recognizer works on a file, matching
/// the synthesis side's storage layout.
pub async fn transcribe(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let path = state
        .store
        .persist_bytes(&body)
        .await
        .map_err(ApiError::Recognition)?;

    let text = state
        .recognizer
        .recognize(&path)
        .await
        .map_err(ApiError::Recognition)?;

    let result = TranscriptionResult::new(text);
    tracing::info!(
        path = %path.display(),
        chars = result.text.chars().count(),
        created_at = %result.created_at,
        "transcribed audio"
    );

    Ok(Json(TranscribeResponse {
        text: result.text,
        stats: 0,
    }))
}
