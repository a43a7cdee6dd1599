//! Server configuration, read from a YAML file.
//!
//! Every field has a default, so a partial file only overrides what it
//! names and a missing or broken file leaves the server on defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "SAFEPAY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "safepay.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Origin of the frontend dev server allowed by CORS
    pub allowed_origin: String,
    /// Built frontend served for every non-API path
    pub static_dir: PathBuf,
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub program: String,
    /// Language code to engine voice name
    pub voices: BTreeMap<String, String>,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            allowed_origin: "http://localhost:8080".to_string(),
            static_dir: PathBuf::from("../frontend/dist"),
            speech: SpeechConfig::default(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        let voices = shared::Language::ALL
            .iter()
            .map(|language| (language.code().to_string(), language.code().to_string()))
            .collect();
        Self {
            program: "espeak-ng".to_string(),
            voices,
            timeout_secs: 15,
        }
    }
}

impl SpeechConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ServerConfig {
    /// Load from the path in `SAFEPAY_CONFIG`, or `safepay.yaml`
    pub fn from_env() -> Self {
        let path = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_or_default(path)
    }

    /// Load config from file, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                debug!("Loaded server config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Ignoring config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    fn load(path: &Path) -> anyhow::Result<Self> {
        let yaml_content = fs::read_to_string(path)?;
        let config: ServerConfig = serde_yaml::from_str(&yaml_content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ServerConfig::load_or_default(temp_dir.path().join("nope.yaml"));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address, "127.0.0.1:3000");
        assert_eq!(config.speech.timeout(), Duration::from_secs(15));
        assert_eq!(config.speech.voices.len(), 6);
    }

    #[test]
    fn test_partial_file_overrides_named_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("safepay.yaml");
        fs::write(
            &path,
            "bind_address: 0.0.0.0:8000\nspeech:\n  program: /usr/bin/espeak\n  timeout_secs: 3\n",
        )
        .unwrap();

        let config = ServerConfig::load_or_default(&path);
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.allowed_origin, "http://localhost:8080");
        assert_eq!(config.speech.program, "/usr/bin/espeak");
        assert_eq!(config.speech.timeout_secs, 3);
        assert_eq!(config.speech.voices.get("hi").map(String::as_str), Some("hi"));
    }

    #[test]
    fn test_invalid_yaml_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("safepay.yaml");
        fs::write(&path, "speech: [not, a, map").unwrap();
        assert_eq!(ServerConfig::load_or_default(&path), ServerConfig::default());
    }
}
