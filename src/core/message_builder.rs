use crate::core::catalog::Catalog;
use crate::domain::model::{FormSubmission, GuideEntry, MessageType};
use chrono::{Locale, NaiveDate};
use std::fmt::Write;

pub const DATE_TO_BE_ARRANGED: &str = "A coordinar";

/// Long Spanish date, e.g. `lunes, 15 de abril de 2024`.
///
/// Dates come from an `<input type="date">`, so only `YYYY-MM-DD` is parsed;
/// anything else is echoed back so the guide still sees what was typed.
pub fn format_preferred_date(date: Option<&str>) -> String {
    let Some(raw) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return DATE_TO_BE_ARRANGED.to_string();
    };

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(day) => day
            .and_hms_opt(0, 0, 0)
            .map(|midnight| {
                midnight
                    .and_utc()
                    .format_localized("%A, %-d de %B de %Y", Locale::es_ES)
                    .to_string()
            })
            .unwrap_or_else(|| raw.to_string()),
        Err(e) => {
            tracing::debug!("Unparseable preferred date '{}': {}", raw, e);
            raw.to_string()
        }
    }
}

/// Formats the contact form as the WhatsApp message the guide receives.
pub fn generate_form_message(data: &FormSubmission, catalog: &Catalog) -> String {
    let company = catalog.company();
    let mut message = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(message, "*NUEVA CONSULTA {}*", company.name.to_uppercase());
    message.push('\n');
    let _ = writeln!(message, "*Nombre:* {}", data.name.trim());
    let _ = writeln!(message, "*Email:* {}", data.email.trim());

    if let Some(phone) = data.phone.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        let _ = writeln!(message, "*Telefono:* {}", phone);
    }

    message.push_str("\n*Experiencia Deseada*\n");
    let _ = writeln!(message, "*Tour:* {}", catalog.tour_name(&data.tour));
    let _ = writeln!(message, "*Nivel:* {}", catalog.level_name(&data.level));
    let _ = writeln!(
        message,
        "*Fecha preferida:* {}",
        format_preferred_date(data.date.as_deref())
    );

    if let Some(comments) = data
        .comments
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        let _ = write!(message, "\n *Comentarios adicionales:*\n {}\n", comments);
    }

    message.push_str("\n---\n");
    let _ = write!(message, "Enviado desde {}", company.website);

    tracing::debug!("Built form message ({} chars)", message.chars().count());
    message
}

/// One-line inquiry for the quick-contact buttons on the tour cards.
pub fn generate_quick_message(tour_id: &str, message_type: &MessageType, catalog: &Catalog) -> String {
    let tour_name = catalog.tour_name(tour_id);

    match message_type {
        MessageType::QuickInquiry => format!(
            "Hola! Me interesa el tour {}. Tienen disponibilidad proxima? Gracias!",
            tour_name
        ),
        MessageType::GeneralInquiry => format!(
            "Hola! Me gustaria recibir informacion detallada sobre {}. Horarios, que incluye, nivel de dificultad, etc. Muchas gracias!",
            tour_name
        ),
        MessageType::Other(kind) => {
            tracing::debug!("No template for message type '{}', using generic inquiry", kind);
            format!(
                "Hola! Me interesa saber mas sobre {}. Podrian contactarme? Gracias!",
                tour_name
            )
        }
    }
}

pub fn generate_confirmation_message(
    data: &FormSubmission,
    guide: &GuideEntry,
    catalog: &Catalog,
) -> String {
    format!(
        "Enviar consulta sobre \"{}\" a {} por Whatsapp",
        catalog.tour_name(&data.tour),
        guide.name
    )
}

pub fn generate_success_message(guide: &GuideEntry) -> String {
    format!(
        "Consulta enviada a {}! Te respondera pronto por Whatsapp.",
        guide.name
    )
}
