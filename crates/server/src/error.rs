//! API error responses.
//!
//! Synthesis and recognition failures are distinct channels: both surface as
//! HTTP 500 with a JSON body carrying an apology text and the underlying
//! error message. A recognition failure is never dressed up as a successful
//! transcription.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use kin_speech_pipeline::PipelineError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Synthesis(PipelineError),

    #[error(transparent)]
    Recognition(PipelineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        // The synthesis body carries a stats field; the recognition body
        // does not.
        let body = match self {
            ApiError::Synthesis(err) => json!({
                "text": "Sorry, we could not generate audio from your text. Please try again.",
                "error": err.to_string(),
                "stats": 0,
            }),
            ApiError::Recognition(err) => json!({
                "text": "Sorry, we could not transcribe your audio. Please try again.",
                "error": err.to_string(),
            }),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
