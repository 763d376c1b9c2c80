use crate::core::catalog::Catalog;
use crate::core::encoder::generate_whatsapp_url;
use crate::core::message_builder::{
    generate_confirmation_message, generate_form_message, generate_quick_message,
    generate_success_message,
};
use crate::core::opener::SecureOpener;
use crate::domain::model::{FormSubmission, GuideEntry, MessageType, QuickButton, Severity};
use crate::domain::ports::{Clock, Confirmer, Navigator, Notifier};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::validate_whatsapp_form;
use std::time::Duration;

const DEFAULT_TOAST: Duration = Duration::from_millis(4000);

/// Validates the form and turns it into a ready-to-open WhatsApp link for `target_phone`.
pub fn process_form_to_whatsapp(
    form: &FormSubmission,
    target_phone: &str,
    catalog: &Catalog,
) -> Result<String> {
    validate_whatsapp_form(form)?;

    let message = generate_form_message(form, catalog);
    Ok(generate_whatsapp_url(target_phone, &message))
}

/// Link for a quick-contact button, addressed to the guide of the button's tour.
pub fn quick_button_url(button: &QuickButton, catalog: &Catalog) -> Result<String> {
    let tour = button
        .tour
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ContactError::validation("Boton sin informacion de tour (data-tour)"))?;
    let message_type = button
        .message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ContactError::validation("Boton sin tipo de mensaje (data-message)"))?;

    let guide = catalog.select_guide(tour);
    let message = generate_quick_message(tour, &MessageType::parse(message_type), catalog);

    Ok(generate_whatsapp_url(&guide.phone, &message))
}

/// Reacts to the contact form and the quick buttons of the tour section.
pub struct ContactHandler<N: Notifier, V: Navigator, C: Clock, K: Confirmer> {
    catalog: Catalog,
    opener: SecureOpener<N, V, C>,
    confirmer: K,
}

impl<N: Notifier, V: Navigator, C: Clock, K: Confirmer> ContactHandler<N, V, C, K> {
    pub fn new(catalog: Catalog, opener: SecureOpener<N, V, C>, confirmer: K) -> Self {
        Self {
            catalog,
            opener,
            confirmer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn opener(&self) -> &SecureOpener<N, V, C> {
        &self.opener
    }

    pub fn opener_mut(&mut self) -> &mut SecureOpener<N, V, C> {
        &mut self.opener
    }

    /// Handles a contact form submission. Returns `true` when WhatsApp was
    /// opened, in which case the caller should clear the form.
    pub fn handle_form_submit(&mut self, form: &FormSubmission) -> bool {
        let guide = self.catalog.select_guide(&form.tour).clone();
        self.submit_to(form, &guide, &guide.phone)
    }

    /// Same flow as [`handle_form_submit`](Self::handle_form_submit), but the
    /// message goes to `target_phone` instead of the tour guide's number.
    pub fn handle_form_submit_to(&mut self, form: &FormSubmission, target_phone: &str) -> bool {
        let guide = self.catalog.select_guide(&form.tour).clone();
        self.submit_to(form, &guide, target_phone)
    }

    fn submit_to(&mut self, form: &FormSubmission, guide: &GuideEntry, target_phone: &str) -> bool {
        let url = match process_form_to_whatsapp(form, target_phone, &self.catalog) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Error processing contact form: {}", e);
                self.opener.notifier().notify(
                    &format!("Error: {}", e.user_friendly_message()),
                    Severity::Error,
                    DEFAULT_TOAST,
                );
                return false;
            }
        };

        let prompt = generate_confirmation_message(form, guide, &self.catalog);
        if !self.confirmer.confirm(&prompt) {
            tracing::debug!("Visitor cancelled the inquiry to {}", guide.name);
            return false;
        }

        if !self.opener.open_whatsapp_securely(&url) {
            return false;
        }

        self.opener.notifier().notify(
            &generate_success_message(guide),
            Severity::Success,
            DEFAULT_TOAST,
        );
        true
    }

    /// Handles a click inside the tour section. Clicks on anything but a
    /// WhatsApp button are ignored and return `false`.
    pub fn handle_quick_button(&mut self, button: &QuickButton) -> bool {
        if !button.is_whatsapp_button() {
            return false;
        }

        let url = match quick_button_url(button, &self.catalog) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Error in WhatsApp quick button: {}", e);
                self.opener.notifier().notify(
                    &format!("Error: {}", e.user_friendly_message()),
                    Severity::Error,
                    DEFAULT_TOAST,
                );
                return false;
            }
        };

        if !self.opener.open_whatsapp_securely(&url) {
            return false;
        }

        let tour_name = self
            .catalog
            .tour_name(button.tour.as_deref().unwrap_or_default());
        self.opener.notifier().notify(
            &format!("Abriendo WhatsApp para consulta sobre {}", tour_name),
            Severity::Success,
            Duration::from_millis(3000),
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_form_rejects_invalid_form() {
        let form = FormSubmission {
            name: "Juan Perez".to_string(),
            email: "juan".to_string(),
            tour: "costa-brava".to_string(),
            ..Default::default()
        };

        let err = process_form_to_whatsapp(&form, "34663575346", &Catalog::builtin()).unwrap_err();
        assert_eq!(err.to_string(), "El email no tiene un formato válido");
    }

    #[test]
    fn test_quick_button_url_requires_data_attributes() {
        let catalog = Catalog::builtin();
        let mut button = QuickButton::new("girona-pro", "consulta-rapida");
        assert!(quick_button_url(&button, &catalog)
            .unwrap()
            .starts_with("https://wa.me/34663575346?text=Hola!%20Me%20interesa%20el%20tour%20Girona%20Pro%20Ride."));

        button.message = None;
        assert_eq!(
            quick_button_url(&button, &catalog).unwrap_err().to_string(),
            "Boton sin tipo de mensaje (data-message)"
        );

        button.tour = Some(String::new());
        assert_eq!(
            quick_button_url(&button, &catalog).unwrap_err().to_string(),
            "Boton sin informacion de tour (data-tour)"
        );
    }
}
