use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one synthesis request.
///
/// Created once per request, written once, read once by the response sender.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Encoded WAV bytes returned to the caller.
    pub audio: Vec<u8>,
    /// Where the audio was persisted.
    pub file_path: PathBuf,
    /// Whether the input text was cut to the configured limit.
    pub truncated: bool,
    /// Human-readable note (currently only the truncation notice).
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn new(audio: Vec<u8>, file_path: PathBuf) -> Self {
        Self {
            audio,
            file_path,
            truncated: false,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a truncation notice.
    pub fn with_truncation(mut self, note: impl Into<String>) -> Self {
        self.truncated = true;
        self.note = Some(note.into());
        self
    }
}

/// Outcome of one recognition request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// Recognized text.
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl TranscriptionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_result_starts_clean() {
        let result = GenerationResult::new(vec![1, 2, 3], PathBuf::from("sounds/a.wav"));
        assert!(!result.truncated);
        assert!(result.note.is_none());
    }

    #[test]
    fn results_are_stamped_at_creation() {
        let before = Utc::now();
        let generated = GenerationResult::new(vec![], PathBuf::from("sounds/a.wav"));
        let transcribed = TranscriptionResult::new("muraho");
        assert!(generated.created_at >= before);
        assert!(transcribed.created_at >= before);
    }

    #[test]
    fn truncation_sets_flag_and_note() {
        let result = GenerationResult::new(vec![], PathBuf::from("sounds/a.wav"))
            .with_truncation("input text was cut at 1000 characters");
        assert!(result.truncated);
        assert!(result.note.unwrap().contains("1000"));
    }
}
