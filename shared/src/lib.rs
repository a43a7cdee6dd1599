use serde::{Deserialize, Serialize};
use std::fmt;

pub mod domain;

pub use domain::bank_verification::{MockBankDirectory, VerificationFailure, VerificationOutcome, VerificationProvider};
pub use domain::connect_bank_wizard::{BankField, BankLinkError, ConnectBankWizard, WizardStep, SUPPORTED_BANKS};
pub use domain::countdown::{Countdown, CountdownEvent, ExpiryPolicy};
pub use domain::formatting::format_inr;
pub use domain::fraud_detection::{FraudClassifier, StaticFraudClassifier};
pub use domain::localization::Localizer;
pub use domain::models::bank_account::{BankAccount, BankLinkForm};
pub use domain::models::transaction::{
    PaymentMethod, Transaction, TransactionDirection, TransactionFilter, TransactionQuery, TransactionStatus,
    TransactionSummary,
};
pub use domain::models::transfer::{FraudAlertType, TransferField, TransferForm, TransferMethod};
pub use domain::money_transfer::{SendMoneyFlow, SubmitOutcome, TransferReceipt, TransferValidationError};
pub use domain::presentation::{KeyValueStore, MemoryStore, PreferenceStore, PresentationSettings, ELDER_MODE_KEY};
pub use domain::speech::{PlaybackTicket, SpeechError, SpeechSynthesizer};
pub use domain::transaction_review::{LedgerError, TransactionLedger};
pub use domain::undo_transaction::{UndoEvent, UndoTransactionFlow};
pub use domain::voice_confirmation::{ConfirmationRequest, VoiceConfirmation, VoiceEvent};

/// Request body for `POST /api/text-to-speech`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextToSpeechRequest {
    /// Sentence to synthesize
    #[serde(default)]
    pub text: String,
    /// Language code, e.g. "en" or "hi"; English when omitted
    #[serde(default = "default_speech_language")]
    pub language: String,
}

fn default_speech_language() -> String {
    Language::default().code().to_string()
}

/// Error body returned by the backend for rejected requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Diagnostic line relayed from the browser to the backend log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

/// Display and speech languages offered by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "kn")]
    Kannada,
    #[serde(rename = "bn")]
    Bengali,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::Kannada,
        Language::Bengali,
    ];

    /// ISO 639-1 code sent to the speech endpoint
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Kannada => "kn",
            Language::Bengali => "bn",
        }
    }

    /// Name of the language written in its own script, for the language picker
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
            Language::Kannada => "ಕನ್ನಡ",
            Language::Bengali => "বাংলা",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The four client-side views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppRoute {
    Home,
    ConnectBank,
    SendMoney,
    ReviewMoney,
}

impl AppRoute {
    pub const ALL: [AppRoute; 4] = [
        AppRoute::Home,
        AppRoute::ConnectBank,
        AppRoute::SendMoney,
        AppRoute::ReviewMoney,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::ConnectBank => "/connect-bank",
            AppRoute::SendMoney => "/send-money",
            AppRoute::ReviewMoney => "/review-money",
        }
    }

    /// Localization key of the navbar label
    pub fn label_key(&self) -> &'static str {
        match self {
            AppRoute::Home => "nav.home",
            AppRoute::ConnectBank => "nav.connectBank",
            AppRoute::SendMoney => "nav.sendMoney",
            AppRoute::ReviewMoney => "nav.reviewMoney",
        }
    }

    /// Unknown paths land on the home view
    pub fn from_path(path: &str) -> AppRoute {
        let trimmed = path.trim_end_matches('/');
        AppRoute::ALL
            .iter()
            .copied()
            .find(|route| route.path() == trimmed)
            .unwrap_or(AppRoute::Home)
    }
}

/// Tunables for the SafePay flows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafePayConfig {
    /// Transfers strictly above this amount raise a large-amount alert
    pub large_amount_threshold: f64,
    pub verification_delay_ms: u32,
    pub voice_countdown_secs: u32,
    pub undo_countdown_secs: u32,
    /// How long "recent" badges stay on the review list
    pub recent_flag_lifetime_ms: u32,
    pub api_base_url: String,
}

impl Default for SafePayConfig {
    fn default() -> Self {
        Self {
            large_amount_threshold: 50_000.0,
            verification_delay_ms: 3000,
            voice_countdown_secs: 10,
            undo_countdown_secs: 5,
            recent_flag_lifetime_ms: 30_000,
            api_base_url: "http://localhost:3000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("HI"), Some(Language::Hindi));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_language_serializes_as_code() {
        let json = serde_json::to_string(&Language::Kannada).unwrap();
        assert_eq!(json, "\"kn\"");
    }

    #[test]
    fn test_speech_request_defaults() {
        let request: TextToSpeechRequest = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert_eq!(request.language, "en");

        let request: TextToSpeechRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.text, "");
        assert_eq!(request.language, "en");
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(AppRoute::from_path("/send-money"), AppRoute::SendMoney);
        assert_eq!(AppRoute::from_path("/review-money/"), AppRoute::ReviewMoney);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/nowhere"), AppRoute::Home);
    }

    #[test]
    fn test_default_config_matches_prototype() {
        let config = SafePayConfig::default();
        assert_eq!(config.large_amount_threshold, 50_000.0);
        assert_eq!(config.voice_countdown_secs, 10);
        assert_eq!(config.undo_countdown_secs, 5);
        assert_eq!(config.recent_flag_lifetime_ms, 30_000);
    }
}
