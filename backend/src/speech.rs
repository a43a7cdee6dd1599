//! Speech synthesis through an external engine process.

use std::collections::BTreeMap;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::SpeechConfig;

#[derive(Debug, Error)]
pub enum SpeechEngineError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Text must not be empty")]
    EmptyText,
    #[error("could not start speech engine: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("speech engine failed: {0}")]
    Failed(String),
    #[error("speech engine timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait SpeechEngine: Send + Sync {
    fn supports(&self, language: &str) -> bool;

    async fn synthesize(&self, text: &str, language: &str) -> Result<SynthesizedAudio, SpeechEngineError>;
}

/// Runs `espeak-ng --stdout`, which writes a WAV file to stdout
#[derive(Debug, Clone)]
pub struct EspeakEngine {
    program: String,
    voices: BTreeMap<String, String>,
    timeout: Duration,
}

impl EspeakEngine {
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            program: config.program.clone(),
            voices: config.voices.clone(),
            timeout: config.timeout(),
        }
    }
}

#[async_trait]
impl SpeechEngine for EspeakEngine {
    fn supports(&self, language: &str) -> bool {
        self.voices.contains_key(language)
    }

    async fn synthesize(&self, text: &str, language: &str) -> Result<SynthesizedAudio, SpeechEngineError> {
        let voice = self
            .voices
            .get(language)
            .ok_or_else(|| SpeechEngineError::UnsupportedLanguage(language.to_string()))?;
        if text.trim().is_empty() {
            return Err(SpeechEngineError::EmptyText);
        }

        debug!("Running {} with voice {}", self.program, voice);
        let child = Command::new(&self.program)
            .arg("-v")
            .arg(voice)
            .arg("--stdout")
            // end of options: text starting with '-' is still speech
            .arg("--")
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| SpeechEngineError::Timeout(self.timeout))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("{} exited with {}: {}", self.program, output.status, stderr);
            return Err(SpeechEngineError::Failed(stderr));
        }
        if output.stdout.is_empty() {
            return Err(SpeechEngineError::Failed("no audio produced".to_string()));
        }

        Ok(SynthesizedAudio {
            content_type: "audio/wav".to_string(),
            bytes: output.stdout,
        })
    }
}
