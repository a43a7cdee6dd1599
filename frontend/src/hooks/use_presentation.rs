use shared::domain::presentation::ELDER_MODE_CLASS;
use shared::{Language, Localizer, PreferenceStore, PresentationSettings};
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::storage::BrowserStorage;

/// Elder mode and language, provided once at the root and read by every view
#[derive(Clone, PartialEq)]
pub struct PresentationContext {
    pub settings: PresentationSettings,
    pub toggle_elder_mode: Callback<()>,
    pub set_language: Callback<Language>,
}

impl Default for PresentationContext {
    fn default() -> Self {
        Self {
            settings: PresentationSettings::default(),
            toggle_elder_mode: Callback::noop(),
            set_language: Callback::noop(),
        }
    }
}

impl PresentationContext {
    pub fn elder_mode(&self) -> bool {
        self.settings.elder_mode
    }

    pub fn localizer(&self) -> Localizer {
        self.settings.localizer()
    }

    pub fn t(&self, key: &str) -> String {
        self.localizer().t(key)
    }

    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        self.localizer().t_with(key, vars)
    }

    /// Pick the normal or the elder-mode variant of a CSS class
    pub fn scaled(&self, normal: &'static str, elder: &'static str) -> &'static str {
        if self.settings.elder_mode {
            elder
        } else {
            normal
        }
    }
}

/// Read the context provided by the root component
#[hook]
pub fn use_presentation() -> PresentationContext {
    use_context::<PresentationContext>().unwrap_or_default()
}

/// Owns the settings at the root: loads them once, persists elder mode
/// on every change and mirrors it as a class on `<body>`.
#[hook]
pub fn use_presentation_provider() -> PresentationContext {
    let settings = use_state(|| PreferenceStore::new(BrowserStorage).load());

    let toggle_elder_mode = {
        let settings = settings.clone();
        use_callback(*settings, move |_: (), current: &PresentationSettings| {
            let preferences = PreferenceStore::new(BrowserStorage);
            let mut next = *current;
            if let Err(e) = preferences.toggle_elder_mode(&mut next) {
                Logger::warn_with_component("presentation", &format!("Could not persist elder mode: {}", e));
            }
            settings.set(next);
        })
    };

    let set_language = {
        let settings = settings.clone();
        use_callback(*settings, move |language: Language, current: &PresentationSettings| {
            settings.set(PresentationSettings { language, ..*current });
        })
    };

    use_effect_with(settings.elder_mode, |elder_mode| {
        if let Err(e) = apply_body_class(*elder_mode) {
            Logger::warn_with_component("presentation", &e);
        }
        || ()
    });

    PresentationContext {
        settings: *settings,
        toggle_elder_mode,
        set_language,
    }
}

/// Mirror elder mode as a class on `<body>`
fn apply_body_class(elder_mode: bool) -> Result<(), String> {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .ok_or_else(|| "No document body".to_string())?;
    body.class_list()
        .toggle_with_force(ELDER_MODE_CLASS, elder_mode)
        .map(|_| ())
        .map_err(|e| format!("Could not update body class: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_has_class() -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .map(|body| body.class_list().contains(ELDER_MODE_CLASS))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn test_body_class_follows_elder_mode() {
        apply_body_class(true).unwrap();
        assert!(body_has_class());

        apply_body_class(false).unwrap();
        assert!(!body_has_class());
    }
}
