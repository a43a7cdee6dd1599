//! Session-wide presentation state: elder mode and display language.
//!
//! Only the elder-mode flag survives a reload. It is stored as a JSON boolean
//! under [`ELDER_MODE_KEY`], read once at startup and written on every change.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::localization::Localizer;
use crate::Language;

pub const ELDER_MODE_KEY: &str = "elder-mode";

/// CSS class put on `<body>` while elder mode is on
pub const ELDER_MODE_CLASS: &str = "elder-mode";

/// String key-value persistence, e.g. browser local storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// In-memory store, used natively and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }
}

/// What every view reads to decide font scale and text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationSettings {
    pub elder_mode: bool,
    pub language: Language,
}

impl PresentationSettings {
    pub fn body_class(&self) -> Option<&'static str> {
        self.elder_mode.then_some(ELDER_MODE_CLASS)
    }

    pub fn localizer(&self) -> Localizer {
        Localizer::new(self.language)
    }
}

/// Owns loading and saving of the persisted part of [`PresentationSettings`]
#[derive(Debug)]
pub struct PreferenceStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Startup settings. The language always starts at the default.
    pub fn load(&self) -> PresentationSettings {
        PresentationSettings {
            elder_mode: self.load_elder_mode(),
            language: Language::default(),
        }
    }

    fn load_elder_mode(&self) -> bool {
        match self.store.get(ELDER_MODE_KEY) {
            Some(raw) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed {} value {:?}: {}", ELDER_MODE_KEY, raw, e);
                false
            }),
            None => false,
        }
    }

    pub fn save_elder_mode(&self, enabled: bool) -> Result<(), String> {
        let value = if enabled { "true" } else { "false" };
        self.store.set(ELDER_MODE_KEY, value)
    }

    /// Flip elder mode and persist the new value.
    ///
    /// The in-memory setting changes even if the write fails, so the UI
    /// reacts either way; the error is returned for logging.
    pub fn toggle_elder_mode(&self, settings: &mut PresentationSettings) -> Result<(), String> {
        settings.elder_mode = !settings.elder_mode;
        self.save_elder_mode(settings.elder_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let preferences = PreferenceStore::new(MemoryStore::new());
        let settings = preferences.load();
        assert!(!settings.elder_mode);
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.body_class(), None);
    }

    #[test]
    fn test_elder_mode_survives_reload() {
        let storage = MemoryStore::new();

        let preferences = PreferenceStore::new(&storage);
        let mut settings = preferences.load();
        settings.language = Language::Tamil;
        preferences.toggle_elder_mode(&mut settings).unwrap();
        assert_eq!(storage.get(ELDER_MODE_KEY).as_deref(), Some("true"));

        // a fresh store over the same storage is a page reload
        let reloaded = PreferenceStore::new(&storage).load();
        assert!(reloaded.elder_mode);
        assert_eq!(reloaded.body_class(), Some("elder-mode"));
        assert_eq!(reloaded.language, Language::English);
    }

    #[test]
    fn test_toggle_twice_writes_false() {
        let storage = MemoryStore::new();
        let preferences = PreferenceStore::new(&storage);
        let mut settings = preferences.load();
        preferences.toggle_elder_mode(&mut settings).unwrap();
        preferences.toggle_elder_mode(&mut settings).unwrap();
        assert!(!settings.elder_mode);
        assert_eq!(storage.get(ELDER_MODE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_malformed_value_reads_as_off() {
        let storage = MemoryStore::new();
        storage.set(ELDER_MODE_KEY, "yes please").unwrap();
        assert!(!PreferenceStore::new(&storage).load().elder_mode);
    }

    #[test]
    fn test_failed_write_still_toggles() {
        let preferences = PreferenceStore::new(ReadOnlyStore);
        let mut settings = preferences.load();
        assert!(preferences.toggle_elder_mode(&mut settings).is_err());
        assert!(settings.elder_mode);
    }

    #[test]
    fn test_localizer_follows_language() {
        let settings = PresentationSettings {
            elder_mode: false,
            language: Language::Hindi,
        };
        assert_eq!(settings.localizer().language(), Language::Hindi);
    }
}
