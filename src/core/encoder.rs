use crate::utils::validation::digits_only;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Characters a URI component may carry unescaped (RFC 3986 unreserved plus `!'()*`).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URI component set, minus the characters WhatsApp reads as formatting
/// (`*` bold, `_` italic, `~` strikethrough) and quotes/parens that break
/// out of shell or attribute contexts.
const WHATSAPP_TEXT: &AsciiSet = &URI_COMPONENT
    .add(b'\'')
    .add(b'"')
    .add(b'(')
    .add(b'*')
    .add(b'_')
    .add(b'~');

/// Percent-encodes a message for the `text` parameter of a WhatsApp link.
pub fn encode_whatsapp_message(message: &str) -> String {
    utf8_percent_encode(message, WHATSAPP_TEXT).to_string()
}

/// Builds `https://wa.me/<digits>?text=<encoded>`.
///
/// Non-digit characters are stripped from the phone. No validation happens
/// here; pass the result through [`crate::core::security::validate_whatsapp_url`]
/// before opening it.
pub fn generate_whatsapp_url(phone: &str, message: &str) -> String {
    let clean_phone = digits_only(phone);
    let encoded_message = encode_whatsapp_message(message);

    format!("{}/{}?text={}", WHATSAPP_BASE_URL, clean_phone, encoded_message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_formatting_characters_are_escaped() {
        assert_eq!(
            encode_whatsapp_message("*hola* _ti_ ~no~ 'x' \"y\" (z)"),
            "%2Ahola%2A%20%5Fti%5F%20%7Eno%7E%20%27x%27%20%22y%22%20%28z)"
        );
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(encode_whatsapp_message("Hola! a-b.c"), "Hola!%20a-b.c");
        assert_eq!(encode_whatsapp_message("día\n¿?&="), "d%C3%ADa%0A%C2%BF%3F%26%3D");
    }

    #[test]
    fn test_generate_url_strips_phone_formatting() {
        let url = generate_whatsapp_url("+34 663-575-346", "Hola");
        assert_eq!(url, "https://wa.me/34663575346?text=Hola");
    }

    #[test]
    fn test_url_round_trip_recovers_phone_and_message() {
        let messages = [
            "It's \"great\" (really) *bold* _it_ ~strike~",
            "Línea 1\nLínea 2 & más + 100%",
            "",
        ];

        for message in messages {
            let url = Url::parse(&generate_whatsapp_url("(34) 600 123 456", message)).unwrap();

            assert_eq!(url.path(), "/34600123456");
            let text = url
                .query_pairs()
                .find(|(k, _)| k == "text")
                .map(|(_, v)| v.into_owned())
                .unwrap();
            assert_eq!(text, message);
        }
    }
}
