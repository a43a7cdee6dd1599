//! Localized strings.
//!
//! One nested JSON table per language, embedded at compile time. Keys are
//! dotted paths (`errors.amount`), templates use `{{name}}` placeholders.
//! A key that does not resolve to a string comes back unchanged, so a
//! missing translation shows up as its key instead of breaking the page.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::Language;

static TABLES: Lazy<HashMap<Language, Value>> = Lazy::new(|| {
    Language::ALL
        .iter()
        .map(|language| (*language, parse_table(*language)))
        .collect()
});

fn raw_table(language: Language) -> &'static str {
    match language {
        Language::English => include_str!("../../locales/en.json"),
        Language::Hindi => include_str!("../../locales/hi.json"),
        Language::Tamil => include_str!("../../locales/ta.json"),
        Language::Telugu => include_str!("../../locales/te.json"),
        Language::Kannada => include_str!("../../locales/kn.json"),
        Language::Bengali => include_str!("../../locales/bn.json"),
    }
}

fn parse_table(language: Language) -> Value {
    match serde_json::from_str(raw_table(language)) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to parse {} string table: {}", language, e);
            Value::Null
        }
    }
}

/// Descends the dotted path; reaching a string ends the walk, so trailing
/// segments under a leaf are ignored.
fn lookup<'a>(table: &'a Value, key: &str) -> Option<&'a str> {
    let mut node = table;
    for segment in key.split('.') {
        if node.is_string() {
            break;
        }
        node = node.get(segment)?;
    }
    node.as_str()
}

fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{{{}}}}}", name), value)
    })
}

/// String lookup for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        match TABLES.get(&self.language).and_then(|table| lookup(table, key)) {
            Some(template) => interpolate(template, vars),
            None => key.to_string(),
        }
    }

    /// True when the key resolves to a string in this language
    pub fn has_key(&self, key: &str) -> bool {
        TABLES
            .get(&self.language)
            .and_then(|table| lookup(table, key))
            .is_some()
    }
}

/// Every dotted key that resolves to a string, for completeness checks
pub fn string_keys(language: Language) -> Vec<String> {
    fn walk(prefix: &str, node: &Value, keys: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (name, child) in map {
                    let path = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{}.{}", prefix, name)
                    };
                    walk(&path, child, keys);
                }
            }
            Value::String(_) => keys.push(prefix.to_string()),
            _ => {}
        }
    }

    let mut keys = Vec::new();
    if let Some(table) = TABLES.get(&language) {
        walk("", table, &mut keys);
    }
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_lookup() {
        let localizer = Localizer::new(Language::English);
        assert_eq!(localizer.t("errors.amount"), "Please enter a valid amount greater than zero");
        assert_eq!(localizer.t("transferDetails"), "Transfer Details");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let localizer = Localizer::new(Language::Hindi);
        assert_eq!(localizer.t("does.not.exist"), "does.not.exist");
        assert_eq!(localizer.t(""), "");
        // an object node is not a string either
        assert_eq!(localizer.t("errors"), "errors");
        assert!(!localizer.has_key("errors"));
    }

    #[test]
    fn test_lookup_stops_at_string_leaf() {
        let localizer = Localizer::new(Language::English);
        assert_eq!(localizer.t("transferDetails.extra"), "Transfer Details");
        assert_eq!(localizer.t("voice.title.more.segments"), "Voice Confirmation Required");
    }

    #[test]
    fn test_placeholder_substitution_replaces_every_occurrence() {
        assert_eq!(interpolate("{{a}} and {{a}} and {{b}}", &[("a", "x"), ("b", "y")]), "x and x and y");
        assert_eq!(interpolate("{{missing}} stays", &[("a", "x")]), "{{missing}} stays");

        let localizer = Localizer::new(Language::English);
        assert_eq!(localizer.t_with("sendButton", &[("amount", "500")]), "Send ₹500");
    }

    #[test]
    fn test_voice_sentence_is_localized() {
        let vars = [("amount", "1200"), ("recipient", "Asha")];
        let english = Localizer::new(Language::English).t_with("voice.confirmation", &vars);
        assert_eq!(english, "1200 rupees will be sent to Asha. Please confirm.");

        let hindi = Localizer::new(Language::Hindi).t_with("voice.confirmation", &vars);
        assert!(hindi.contains("1200"));
        assert!(hindi.contains("Asha"));
        assert_ne!(hindi, english);
    }

    #[test]
    fn test_every_language_has_every_english_key() {
        let english_keys = string_keys(Language::English);
        assert!(english_keys.len() > 50);

        for language in Language::ALL {
            let localizer = Localizer::new(language);
            let missing: Vec<&String> = english_keys.iter().filter(|key| !localizer.has_key(key)).collect();
            assert!(missing.is_empty(), "{} is missing {:?}", language, missing);
        }
    }
}
