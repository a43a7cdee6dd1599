use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use shared::{ErrorResponse, LogRequest, LogResponse, TextToSpeechRequest};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::speech::{SpeechEngine, SpeechEngineError};

/// Application state shared by the handlers
#[derive(Clone)]
pub struct AppState {
    pub speech_engine: Arc<dyn SpeechEngine>,
}

impl AppState {
    pub fn new(speech_engine: Arc<dyn SpeechEngine>) -> Self {
        Self { speech_engine }
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> anyhow::Result<Router> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid allowed_origin {:?}", config.allowed_origin))?;

    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/text-to-speech", post(text_to_speech))
        .route("/logs", post(log_message));

    Ok(Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .with_state(app_state))
}

fn error_response(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorResponse { detail })).into_response()
}

/// Axum handler function for POST /api/text-to-speech
pub async fn text_to_speech(
    State(state): State<AppState>,
    Json(request): Json<TextToSpeechRequest>,
) -> Response {
    info!(
        "POST /api/text-to-speech - language: {}, {} chars",
        request.language,
        request.text.chars().count()
    );

    let language = request.language.trim().to_lowercase();
    if !state.speech_engine.supports(&language) {
        let err = SpeechEngineError::UnsupportedLanguage(request.language.clone());
        warn!("Rejected speech request: {}", err);
        return error_response(StatusCode::BAD_REQUEST, err.to_string());
    }
    if request.text.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, SpeechEngineError::EmptyText.to_string());
    }

    match state.speech_engine.synthesize(&request.text, &language).await {
        Ok(audio) => {
            debug!("Synthesized {} bytes of {}", audio.bytes.len(), audio.content_type);
            ([(header::CONTENT_TYPE, audio.content_type)], audio.bytes).into_response()
        }
        Err(e) => {
            error!("Error synthesizing speech: {}", e);
            let status = match e {
                SpeechEngineError::UnsupportedLanguage(_) | SpeechEngineError::EmptyText => StatusCode::BAD_REQUEST,
                SpeechEngineError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                SpeechEngineError::Spawn(_) | SpeechEngineError::Failed(_) => StatusCode::BAD_GATEWAY,
            };
            error_response(status, e.to_string())
        }
    }
}

/// Axum handler function for POST /api/logs
///
/// Re-emits a browser diagnostic line at the requested level.
pub async fn log_message(Json(request): Json<LogRequest>) -> Json<LogResponse> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, request.message);

    match request.level.to_lowercase().as_str() {
        "debug" => debug!("{}", message),
        "warn" => warn!("{}", message),
        "error" => error!("{}", message),
        _ => info!("{}", message),
    }

    Json(LogResponse { success: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::speech::SynthesizedAudio;

    enum Behavior {
        Speak,
        Fail,
        Hang,
    }

    struct FakeEngine {
        behavior: Behavior,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl FakeEngine {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl SpeechEngine for FakeEngine {
        fn supports(&self, language: &str) -> bool {
            shared::Language::from_code(language).is_some()
        }

        async fn synthesize(&self, text: &str, language: &str) -> Result<SynthesizedAudio, SpeechEngineError> {
            self.calls.lock().unwrap().push((text.to_string(), language.to_string()));
            match self.behavior {
                Behavior::Speak => Ok(SynthesizedAudio {
                    content_type: "audio/wav".to_string(),
                    bytes: b"RIFF....WAVE".to_vec(),
                }),
                Behavior::Fail => Err(SpeechEngineError::Failed("voice missing".to_string())),
                Behavior::Hang => Err(SpeechEngineError::Timeout(Duration::from_secs(15))),
            }
        }
    }

    fn speech_request(text: &str, language: &str) -> Json<TextToSpeechRequest> {
        Json(TextToSpeechRequest {
            text: text.to_string(),
            language: language.to_string(),
        })
    }

    async fn error_detail(response: Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice::<ErrorResponse>(&body).unwrap().detail
    }

    #[tokio::test]
    async fn test_text_to_speech_returns_audio() {
        let engine = FakeEngine::new(Behavior::Speak);
        let state = AppState::new(engine.clone());

        let response = text_to_speech(State(state), speech_request("500 rupees will be sent to Asha.", "EN")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/wav");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"RIFF....WAVE");

        let calls = engine.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[("500 rupees will be sent to Asha.".to_string(), "en".to_string())]);
    }

    #[tokio::test]
    async fn test_unsupported_language_is_bad_request() {
        let engine = FakeEngine::new(Behavior::Speak);
        let state = AppState::new(engine.clone());

        let response = text_to_speech(State(state), speech_request("bonjour", "fr")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_detail(response).await, "Unsupported language: fr");
        assert!(engine.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_text_is_bad_request() {
        let state = AppState::new(FakeEngine::new(Behavior::Speak));
        let response = text_to_speech(State(state), speech_request("  ", "hi")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_detail(response).await, "Text must not be empty");
    }

    #[tokio::test]
    async fn test_engine_failures_map_to_gateway_errors() {
        let failing = AppState::new(FakeEngine::new(Behavior::Fail));
        let response = text_to_speech(State(failing), speech_request("hello", "en")).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let hanging = AppState::new(FakeEngine::new(Behavior::Hang));
        let response = text_to_speech(State(hanging), speech_request("hello", "en")).await;
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn test_log_message_handler() {
        let request = LogRequest {
            level: "WARN".to_string(),
            message: "Speech fetch failed".to_string(),
            component: Some("voice-confirmation".to_string()),
        };
        let Json(response) = log_message(Json(request)).await;
        assert!(response.success);
    }

    #[tokio::test]
    async fn test_router_serves_api_routes() {
        let state = AppState::new(FakeEngine::new(Behavior::Speak));
        let app = create_router(state, &ServerConfig::default()).unwrap();

        let request = Request::builder()
            .method("POST")
            .uri("/api/text-to-speech")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"text":"hello","language":"ta"}"#))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder()
            .method("POST")
            .uri("/api/logs")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"level":"info","message":"hi","component":null}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"success":true}"#);
    }

    #[tokio::test]
    async fn test_router_defaults_missing_language_to_english() {
        let engine = FakeEngine::new(Behavior::Speak);
        let app = create_router(AppState::new(engine.clone()), &ServerConfig::default()).unwrap();

        let request = Request::builder()
            .method("POST")
            .uri("/api/text-to-speech")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"text":"hello"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(engine.calls.lock().unwrap()[0].1, "en");
    }

    #[test]
    fn test_router_rejects_bad_origin() {
        let state = AppState::new(FakeEngine::new(Behavior::Speak));
        let config = ServerConfig {
            allowed_origin: "not a\nheader".to_string(),
            ..ServerConfig::default()
        };
        assert!(create_router(state, &config).is_err());
    }
}
