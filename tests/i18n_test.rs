use velobrava_contact::adapters::MemoryPreferences;
use velobrava_contact::domain::ports::PreferenceStore;
use velobrava_contact::i18n::Translator;
use velobrava_contact::ContactError;

const ES: &str = r#"{
    "nav": { "tours": "Tours", "contact": "Contacto" },
    "hero": { "title": "Pedalea la Costa Brava", "greeting": "Hola {{name}}, bienvenido a {{site}}" },
    "footer": { "legal": "Todos los derechos reservados" }
}"#;

const EN: &str = r#"{
    "nav": { "tours": "Tours", "contact": "Contact" },
    "hero": { "title": "Ride the Costa Brava", "greeting": "Hi {{name}}, welcome to {{site}}" }
}"#;

fn translator(stored: Option<&str>, browser: Option<&str>) -> Translator<MemoryPreferences> {
    let mut prefs = MemoryPreferences::default();
    if let Some(code) = stored {
        prefs.set("velodrama_idioma", code);
    }
    let mut translator = Translator::new(prefs, browser);
    translator.install_catalog("es", ES).unwrap();
    translator.install_catalog("en", EN).unwrap();
    translator
}

#[test]
fn test_starts_in_detected_language() {
    assert_eq!(translator(Some("en"), Some("fr-FR")).current_language(), "en");
    assert_eq!(translator(None, Some("en-GB")).current_language(), "en");
    assert_eq!(translator(Some("xx"), None).current_language(), "es");
}

#[test]
fn test_nested_lookup_and_interpolation() {
    let translator = translator(None, None);

    assert_eq!(translator.t("nav.contact"), "Contacto");
    assert_eq!(
        translator.translate("hero.greeting", &[("name", "Ana"), ("site", "Velobrava")]),
        "Hola Ana, bienvenido a Velobrava"
    );
    assert_eq!(
        translator.translate("hero.greeting", &[("name", "Ana")]),
        "Hola Ana, bienvenido a {{site}}"
    );
}

#[test]
fn test_missing_key_uses_fallback_text() {
    let translator = translator(None, None);
    assert_eq!(translator.t("hero.subtitle"), "TEXTO_NO_ENCONTRADO: hero.subtitle");
    assert_eq!(translator.t("nav.contact.label"), "TEXTO_NO_ENCONTRADO: nav.contact.label");
}

#[test]
fn test_change_language_persists_choice() {
    let mut translator = translator(None, None);

    assert!(translator.change_language("en").unwrap());
    assert_eq!(translator.t("hero.title"), "Ride the Costa Brava");
    assert_eq!(
        translator.preferences().get("velodrama_idioma").as_deref(),
        Some("en")
    );

    // already active
    assert!(!translator.change_language("en").unwrap());

    assert!(matches!(
        translator.change_language("de"),
        Err(ContactError::UnsupportedLanguage { code }) if code == "de"
    ));
    assert_eq!(translator.current_language(), "en");
}

#[test]
fn test_key_missing_in_active_language_falls_back_to_default() {
    let mut translator = translator(None, None);
    translator.change_language("en").unwrap();
    assert_eq!(translator.t("footer.legal"), "Todos los derechos reservados");

    // no French catalog installed at all
    translator.change_language("fr").unwrap();
    assert_eq!(translator.t("nav.contact"), "Contacto");
    assert!(!translator.has_catalog("fr"));
}
