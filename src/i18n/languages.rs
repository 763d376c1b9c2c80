/// A language the site ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    /// Country code used for the flag next to the language name.
    pub flag: &'static str,
}

pub const LANGUAGES: [Language; 3] = [
    Language {
        code: "es",
        name: "Español",
        flag: "es",
    },
    Language {
        code: "en",
        name: "English",
        flag: "us",
    },
    Language {
        code: "fr",
        name: "Francais",
        flag: "fr",
    },
];

pub const DEFAULT_LANGUAGE: &str = "es";

/// Preference key the chosen language is stored under.
pub const STORAGE_KEY: &str = "velodrama_idioma";

/// Prefix of the text shown in place of a missing translation.
pub const FALLBACK_TEXT: &str = "TEXTO_NO_ENCONTRADO";

pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

pub fn is_supported(code: &str) -> bool {
    find_language(code).is_some()
}

/// Picks the stored preference, else the browser language, else the default.
///
/// Only the primary subtag of the browser locale is considered, so `fr-CA`
/// selects French.
pub fn detect_language(stored: Option<&str>, browser_locale: Option<&str>) -> &'static str {
    if let Some(lang) = stored.and_then(find_language) {
        return lang.code;
    }

    let browser = browser_locale
        .and_then(|locale| locale.get(..2))
        .map(str::to_ascii_lowercase);
    if let Some(lang) = browser.as_deref().and_then(find_language) {
        return lang.code;
    }

    DEFAULT_LANGUAGE
}
