use crate::domain::ports::PreferenceStore;
use crate::i18n::languages::{self, DEFAULT_LANGUAGE, FALLBACK_TEXT, STORAGE_KEY};
use crate::utils::error::{ContactError, Result};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// Replaces `{{name}}` placeholders. Placeholders without a value stay as written.
pub fn interpolate(text: &str, variables: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &regex::Captures| {
            let name = &caps[1];
            variables
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Key lookup over per-language translation trees.
///
/// Catalogs are JSON objects handed in by the caller; keys are dot paths
/// into them (`hero.title`). A key missing from the active language is
/// looked up in the default language before giving up.
pub struct Translator<P: PreferenceStore> {
    current: &'static str,
    catalogs: HashMap<&'static str, Value>,
    preferences: P,
}

impl<P: PreferenceStore> Translator<P> {
    /// Starts in the language detected from the stored preference and the
    /// browser locale.
    pub fn new(preferences: P, browser_locale: Option<&str>) -> Self {
        let stored = preferences.get(STORAGE_KEY);
        let current = languages::detect_language(stored.as_deref(), browser_locale);
        tracing::debug!("Translator starting in '{}'", current);

        Self {
            current,
            catalogs: HashMap::new(),
            preferences,
        }
    }

    pub fn current_language(&self) -> &'static str {
        self.current
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn has_catalog(&self, code: &str) -> bool {
        self.catalogs.contains_key(code)
    }

    /// Parses and caches the translations for a language, replacing any
    /// previous catalog for it.
    pub fn install_catalog(&mut self, code: &str, json: &str) -> Result<()> {
        let language = languages::find_language(code).ok_or_else(|| {
            ContactError::UnsupportedLanguage {
                code: code.to_string(),
            }
        })?;

        let catalog: Value = serde_json::from_str(json)?;
        if !catalog.is_object() {
            return Err(ContactError::ConfigError {
                message: format!("Translations for '{}' must be a JSON object", code),
            });
        }

        self.catalogs.insert(language.code, catalog);
        tracing::debug!("Translations installed for '{}'", language.code);
        Ok(())
    }

    /// Switches language and remembers the choice. Returns `false` when the
    /// language was already active.
    pub fn change_language(&mut self, code: &str) -> Result<bool> {
        if code == self.current {
            tracing::debug!("Already using '{}'", code);
            return Ok(false);
        }

        let language = languages::find_language(code).ok_or_else(|| {
            ContactError::UnsupportedLanguage {
                code: code.to_string(),
            }
        })?;

        if !self.catalogs.contains_key(language.code) {
            tracing::warn!(
                "No translations installed for '{}', keys will resolve from '{}'",
                language.code,
                DEFAULT_LANGUAGE
            );
        }

        tracing::info!("Language changed from '{}' to '{}'", self.current, language.code);
        self.current = language.code;
        self.preferences.set(STORAGE_KEY, language.code);
        Ok(true)
    }

    fn lookup(&self, code: &str, key: &str) -> Option<String> {
        let mut node = self.catalogs.get(code)?;
        for part in key.split('.') {
            node = node.as_object()?.get(part)?;
        }

        match node {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    /// Translation for `key` with `{{var}}` placeholders filled in, or
    /// `TEXTO_NO_ENCONTRADO: <key>` when no catalog has it.
    pub fn translate(&self, key: &str, variables: &[(&str, &str)]) -> String {
        let found = self.lookup(self.current, key).or_else(|| {
            if self.current == DEFAULT_LANGUAGE {
                None
            } else {
                self.lookup(DEFAULT_LANGUAGE, key)
            }
        });

        match found {
            Some(text) if variables.is_empty() => text,
            Some(text) => interpolate(&text, variables),
            None => {
                tracing::warn!("Translation not found: {}", key);
                format!("{}: {}", FALLBACK_TEXT, key)
            }
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryPreferences;

    #[test]
    fn test_interpolate_keeps_unknown_placeholders() {
        assert_eq!(
            interpolate("Hola {{name}}, tour {{tour}} {{ name }}", &[("name", "Ana")]),
            "Hola Ana, tour {{tour}} {{ name }}"
        );
    }

    #[test]
    fn test_placeholder_names_are_ascii_only() {
        assert_eq!(
            interpolate("{{año}} / {{year_2}}", &[("año", "2024"), ("year_2", "2025")]),
            "{{año}} / 2025"
        );
    }

    #[test]
    fn test_install_rejects_non_object_catalog() {
        let mut translator = Translator::new(MemoryPreferences::default(), None);
        assert!(matches!(
            translator.install_catalog("es", "[1, 2]"),
            Err(ContactError::ConfigError { .. })
        ));
        assert!(matches!(
            translator.install_catalog("es", "{not json"),
            Err(ContactError::SerializationError(_))
        ));
        assert!(matches!(
            translator.install_catalog("de", "{}"),
            Err(ContactError::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn test_empty_and_object_values_count_as_missing() {
        let mut translator = Translator::new(MemoryPreferences::default(), None);
        translator
            .install_catalog("es", r#"{"hero": {"title": ""}, "stats": {"tours": 4}}"#)
            .unwrap();

        assert_eq!(translator.t("hero.title"), "TEXTO_NO_ENCONTRADO: hero.title");
        assert_eq!(translator.t("hero"), "TEXTO_NO_ENCONTRADO: hero");
        assert_eq!(translator.t("stats.tours"), "4");
    }
}
