//! Site translations: language detection, key lookup and `{{var}}` interpolation.
//!
//! Fetching the translation files and writing text into the page belong to
//! the host; this module only works on catalogs it is given.

pub mod languages;
pub mod translator;

pub use languages::{detect_language, Language, DEFAULT_LANGUAGE, LANGUAGES};
pub use translator::{interpolate, Translator};
