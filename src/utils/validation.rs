use crate::domain::model::FormSubmission;
use crate::utils::error::{ContactError, Result};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static CONTACT_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-\+\(\)]{8,}$").unwrap());

pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;
pub const MIN_NAME_CHARS: usize = 2;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Strips everything but ASCII digits, the form `wa.me` expects.
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A phone number usable in a `wa.me` link: 7 to 15 digits once formatting is removed.
pub fn validate_phone_digits(field_name: &str, phone: &str) -> Result<()> {
    let digits = digits_only(phone);
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: phone.to_string(),
            reason: format!(
                "Phone must have between {} and {} digits",
                MIN_PHONE_DIGITS, MAX_PHONE_DIGITS
            ),
        });
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Loose check for a visitor-typed phone: digits, spaces, `+ - ( )`, at least 8 characters.
pub fn is_valid_contact_phone(phone: &str) -> bool {
    CONTACT_PHONE.is_match(phone)
}

/// Names of required fields that are missing or blank.
pub fn missing_required_fields<'a>(form: &FormSubmission, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|field| {
            let value = match *field {
                "name" => Some(form.name.as_str()),
                "email" => Some(form.email.as_str()),
                "tour" => Some(form.tour.as_str()),
                "level" => Some(form.level.as_str()),
                "phone" => form.phone.as_deref(),
                "date" => form.date.as_deref(),
                "comments" => form.comments.as_deref(),
                _ => None,
            };
            value.map_or(true, |v| v.trim().is_empty())
        })
        .collect()
}

/// Checks a contact form before it is turned into a WhatsApp message.
/// All failing rules are reported together.
pub fn validate_whatsapp_form(form: &FormSubmission) -> Result<()> {
    let mut errors: Vec<String> = missing_required_fields(form, &["name", "email", "tour"])
        .into_iter()
        .map(|field| format!("El campo {} es obligatorio", field))
        .collect();

    if !form.email.is_empty() && !is_valid_email(&form.email) {
        errors.push("El email no tiene un formato válido".to_string());
    }

    if let Some(phone) = form.phone.as_deref() {
        if !phone.trim().is_empty() && !is_valid_contact_phone(phone) {
            errors.push("El teléfono no tiene un formato válido".to_string());
        }
    }

    let name = form.name.trim();
    if !name.is_empty() && name.chars().count() < MIN_NAME_CHARS {
        errors.push(format!(
            "El nombre debe tener al menos {} caracteres",
            MIN_NAME_CHARS
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!("Form rejected: {:?}", errors);
        Err(ContactError::ValidationError { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormSubmission {
        FormSubmission {
            name: "Juan Perez".to_string(),
            email: "juan@email.com".to_string(),
            tour: "costa-brava".to_string(),
            level: "intermedio".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(is_valid_email("juan@email.com"));
        assert!(!is_valid_email("juan@email"));
        assert!(!is_valid_email("juan perez@email.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_validate_contact_phone() {
        assert!(is_valid_contact_phone("+34 663 575 346"));
        assert!(is_valid_contact_phone("(972) 12-34-56"));
        assert!(!is_valid_contact_phone("1234567"));
        assert!(!is_valid_contact_phone("34663575346 ext"));
    }

    #[test]
    fn test_validate_phone_digits() {
        assert!(validate_phone_digits("phone", "+34 663 575 346").is_ok());
        assert!(validate_phone_digits("phone", "123456").is_err());
        assert!(validate_phone_digits("phone", "1234567890123456").is_err());
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_whatsapp_form(&valid_form()).is_ok());
    }

    #[test]
    fn test_form_collects_every_error() {
        let form = FormSubmission {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            phone: Some("12".to_string()),
            tour: "  ".to_string(),
            ..Default::default()
        };

        match validate_whatsapp_form(&form) {
            Err(ContactError::ValidationError { errors }) => {
                assert_eq!(
                    errors,
                    vec![
                        "El campo tour es obligatorio",
                        "El email no tiene un formato válido",
                        "El teléfono no tiene un formato válido",
                        "El nombre debe tener al menos 2 caracteres",
                    ]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("cooldown_ms", 3000u64, 1, 60_000).is_ok());
        assert!(validate_range("cooldown_ms", 0u64, 1, 60_000).is_err());
    }
}
