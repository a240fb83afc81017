//! Service configuration.
//!
//! One immutable [`ServiceConfig`] is loaded and validated at process start
//! and shared by reference with every component that needs it. Values come
//! from an optional TOML file layered with `KIN_SPEECH_*` environment
//! overrides (e.g. `KIN_SPEECH_TEXT__MAX_CHARS=500`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kin_speech_core::Language;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub translation: TranslationSettings,
    #[serde(default)]
    pub tts: TtsSettings,
    #[serde(default)]
    pub stt: SttSettings,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Text pre-processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Maximum input length in characters; anything beyond is truncated.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

/// Translation provider settings.
///
/// The source/target pair defaults to the observed en -> rw behavior; it is
/// configurable rather than hardcoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSettings {
    /// `http` calls the sidecar endpoint, `disabled` passes text through.
    #[serde(default = "default_http_provider")]
    pub provider: String,
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_source_lang")]
    pub source_lang: Language,
    #[serde(default = "default_target_lang")]
    pub target_lang: Language,
}

/// Speech synthesizer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsSettings {
    /// `sidecar` or `stub`.
    #[serde(default = "default_sidecar_engine")]
    pub engine: String,
    #[serde(default = "default_tts_endpoint")]
    pub endpoint: String,
    /// Fixed reference voice conditioning sample handed to the synthesizer.
    #[serde(default = "default_speaker_wav")]
    pub speaker_wav: PathBuf,
    /// Sample rate used by the stub engine and expected from the sidecar.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Speech recognizer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SttSettings {
    /// `sidecar` or `stub`.
    #[serde(default = "default_sidecar_engine")]
    pub engine: String,
    #[serde(default = "default_stt_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Generated-audio storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Flat directory of generated/uploaded audio. No retention policy; see
    /// the audio store docs.
    #[serde(default = "default_sounds_dir")]
    pub sounds_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_max_chars() -> usize {
    1000
}

fn default_http_provider() -> String {
    "http".to_string()
}

fn default_translation_endpoint() -> String {
    "http://localhost:50051".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_source_lang() -> Language {
    Language::English
}

fn default_target_lang() -> Language {
    Language::Kinyarwanda
}

fn default_sidecar_engine() -> String {
    "sidecar".to_string()
}

fn default_tts_endpoint() -> String {
    "http://localhost:5002".to_string()
}

fn default_stt_endpoint() -> String {
    "http://localhost:5003".to_string()
}

fn default_speaker_wav() -> PathBuf {
    PathBuf::from("conditioning_audio.wav")
}

fn default_sample_rate() -> u32 {
    22_050
}

fn default_sounds_dir() -> PathBuf {
    PathBuf::from("sounds")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            provider: default_http_provider(),
            endpoint: default_translation_endpoint(),
            timeout_ms: default_timeout_ms(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
        }
    }
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            engine: default_sidecar_engine(),
            endpoint: default_tts_endpoint(),
            speaker_wav: default_speaker_wav(),
            sample_rate: default_sample_rate(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for SttSettings {
    fn default() -> Self {
        Self {
            engine: default_sidecar_engine(),
            endpoint: default_stt_endpoint(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            sounds_dir: default_sounds_dir(),
        }
    }
}

impl ServiceConfig {
    /// Load from an optional TOML file layered with environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
            tracing::info!(path = %path.display(), "loading configuration file");
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("KIN_SPEECH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: ServiceConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate once at startup; components receive the config by reference
    /// afterwards and never re-check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text.max_chars == 0 {
            return Err(ConfigError::Invalid(
                "text.max_chars must be greater than zero".into(),
            ));
        }

        match self.translation.provider.as_str() {
            "http" => {
                if self.translation.endpoint.is_empty() {
                    return Err(ConfigError::Invalid(
                        "translation.endpoint is required for the http provider".into(),
                    ));
                }
            }
            "disabled" => {}
            other => {
                return Err(ConfigError::Invalid(format!(
                    "unknown translation provider: {other}"
                )));
            }
        }

        if self.translation.source_lang == self.translation.target_lang {
            return Err(ConfigError::Invalid(
                "translation source and target languages must differ".into(),
            ));
        }

        for (section, engine, endpoint) in [
            ("tts", self.tts.engine.as_str(), self.tts.endpoint.as_str()),
            ("stt", self.stt.engine.as_str(), self.stt.endpoint.as_str()),
        ] {
            match engine {
                "sidecar" => {
                    if endpoint.is_empty() {
                        return Err(ConfigError::Invalid(format!(
                            "{section}.endpoint is required for the sidecar engine"
                        )));
                    }
                }
                "stub" => {}
                other => {
                    return Err(ConfigError::Invalid(format!(
                        "unknown {section} engine: {other}"
                    )));
                }
            }
        }

        if self.storage.sounds_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "storage.sounds_dir must not be empty".into(),
            ));
        }

        Ok(())
    }
}
