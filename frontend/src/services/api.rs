use async_trait::async_trait;
use gloo::net::http::Request;
use shared::domain::speech::TEXT_TO_SPEECH_PATH;
use shared::{ErrorResponse, LogRequest, SafePayConfig, SpeechError, SpeechSynthesizer, TextToSpeechRequest};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(SafePayConfig::default().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Synthesize a sentence; returns the raw audio bytes
    pub async fn text_to_speech(&self, request: &TextToSpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let url = format!("{}{}", self.base_url, TEXT_TO_SPEECH_PATH);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| SpeechError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.detail,
                Err(_) => response.status_text(),
            };
            return Err(SpeechError::Status { status, message });
        }

        let audio = response
            .binary()
            .await
            .map_err(|e| SpeechError::Network(format!("Failed to read audio: {}", e)))?;
        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }
        Ok(audio)
    }

    /// Relay a diagnostic line to the backend log
    pub async fn send_log(&self, request: &LogRequest) -> Result<(), String> {
        let url = format!("{}/api/logs", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => Err(format!("Log relay returned {}", response.status())),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

#[async_trait(?Send)]
impl SpeechSynthesizer for ApiClient {
    async fn synthesize(&self, request: &TextToSpeechRequest) -> Result<Vec<u8>, SpeechError> {
        self.text_to_speech(request).await
    }
}
