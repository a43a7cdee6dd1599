use shared::LogRequest;
use wasm_bindgen_futures::spawn_local;

use crate::services::api::ApiClient;

/// Diagnostic channel: mirrors to the browser console and relays to the backend
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(format!("[{}] {}", component, message));
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(format!("[{}] {}", component, message));
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        // Send log asynchronously without blocking; a failed relay is only echoed locally
        spawn_local(async move {
            if let Err(e) = ApiClient::new().send_log(&request).await {
                gloo::console::debug!("Log relay failed:", e);
            }
        });
    }
}
