use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use velobrava_contact::core::form_handler::quick_button_url;
use velobrava_contact::domain::model::QuickButton;
use velobrava_contact::utils::validation::Validate;
use velobrava_contact::{validate_whatsapp_url, SiteConfig};

#[test]
fn test_configured_guide_receives_quick_inquiries() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[tours.montseny]
name = "Montseny Gravel"
price = 70
duration = "5 horas"
difficulty = "avanzado"

[guides.montseny]
name = "Marta"
phone = "+34 600-111-222"
specialty = "Gravel"

[guides.personalizado]
name = "Alejandro"
phone = "34663575346"
specialty = "Tour personalizado"

[whatsapp]
cooldown_ms = 2000
"#,
    )?;

    let site = SiteConfig::from_file(file.path())?;
    site.validate()?;
    let catalog = site.catalog()?;

    let url = quick_button_url(&QuickButton::new("montseny", "consulta-rapida"), &catalog)?;
    assert!(url.starts_with("https://wa.me/34600111222?text="));
    assert!(url.contains("Montseny%20Gravel"));
    assert!(validate_whatsapp_url(&url));

    // guides table replaced entirely, unknown tours go to the default guide
    let url = quick_button_url(&QuickButton::new("costa-brava", "consulta-rapida"), &catalog)?;
    assert!(url.starts_with("https://wa.me/34663575346?text="));
    assert_eq!(site.cooldown().as_millis(), 2000);

    Ok(())
}

#[test]
fn test_invalid_file_is_reported() {
    let err = SiteConfig::from_toml_str("[whatsapp]\ncooldown_ms = \"soon\"").unwrap_err();
    assert!(err.to_string().starts_with("TOML parsing error"));

    let err = SiteConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().starts_with("IO error"));
}
