//! Gatekeeping for WhatsApp links before anything navigates to them.
//!
//! A link passes when it is structurally a WhatsApp URL (HTTPS, allow-listed
//! host, sane `wa.me` phone segment) and its `text` parameter is within the
//! size limit and free of script-like payloads.

use crate::utils::error::ContactError;
use crate::utils::validation::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
use regex::RegexSet;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

pub const ALLOWED_HOSTS: [&str; 3] = ["wa.me", "api.whatsapp.com", "web.whatsapp.com"];

/// Longest decoded `text` parameter accepted, in characters.
pub const MAX_TEXT_CHARS: usize = 4096;

static SUSPICIOUS_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)<script",
        r"(?i)javascript:",
        r"(?i)data:text/html",
        r"(?i)vbscript:",
    ])
    .unwrap()
});

/// The rule a rejected URL broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlRejection {
    Empty,
    Malformed(String),
    NotHttps(String),
    HostNotAllowed(String),
    MissingPhone,
    PhoneNotNumeric(String),
    PhoneLength(usize),
    TextTooLong(usize),
    SuspiciousContent,
}

impl fmt::Display for UrlRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlRejection::Empty => f.write_str("URL is empty"),
            UrlRejection::Malformed(e) => write!(f, "malformed URL: {}", e),
            UrlRejection::NotHttps(scheme) => write!(f, "scheme must be https, got {}", scheme),
            UrlRejection::HostNotAllowed(host) => write!(f, "host not allowed: {}", host),
            UrlRejection::MissingPhone => f.write_str("wa.me link has no phone number"),
            UrlRejection::PhoneNotNumeric(segment) => {
                write!(f, "phone segment is not numeric: {}", segment)
            }
            UrlRejection::PhoneLength(len) => write!(
                f,
                "phone has {} digits, expected {}-{}",
                len, MIN_PHONE_DIGITS, MAX_PHONE_DIGITS
            ),
            UrlRejection::TextTooLong(len) => {
                write!(f, "message has {} characters, limit is {}", len, MAX_TEXT_CHARS)
            }
            UrlRejection::SuspiciousContent => f.write_str("message contains script-like content"),
        }
    }
}

impl std::error::Error for UrlRejection {}

impl From<UrlRejection> for ContactError {
    fn from(rejection: UrlRejection) -> Self {
        ContactError::UrlRejected {
            reason: rejection.to_string(),
        }
    }
}

fn check_structure(url: &Url) -> Result<(), UrlRejection> {
    if url.scheme() != "https" {
        return Err(UrlRejection::NotHttps(url.scheme().to_string()));
    }

    let host = url.host_str().unwrap_or_default();
    if !ALLOWED_HOSTS.contains(&host) {
        return Err(UrlRejection::HostNotAllowed(host.to_string()));
    }

    if host == "wa.me" {
        let phone = url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|segment| !segment.is_empty())
            .ok_or(UrlRejection::MissingPhone)?;

        if !phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UrlRejection::PhoneNotNumeric(phone.to_string()));
        }
        if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&phone.len()) {
            return Err(UrlRejection::PhoneLength(phone.len()));
        }
    }

    Ok(())
}

fn check_params(url: &Url) -> Result<(), UrlRejection> {
    let Some(text) = url
        .query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value)
    else {
        return Ok(());
    };

    let len = text.chars().count();
    if len > MAX_TEXT_CHARS {
        return Err(UrlRejection::TextTooLong(len));
    }

    if SUSPICIOUS_PATTERNS.is_match(&text) {
        return Err(UrlRejection::SuspiciousContent);
    }

    Ok(())
}

/// Runs every check and reports the first rule the URL breaks.
pub fn inspect_whatsapp_url(url: &str) -> Result<Url, UrlRejection> {
    if url.trim().is_empty() {
        return Err(UrlRejection::Empty);
    }

    let parsed = Url::parse(url).map_err(|e| UrlRejection::Malformed(e.to_string()))?;
    check_structure(&parsed)?;
    check_params(&parsed)?;

    Ok(parsed)
}

/// True when the URL is safe to open. Malformed input is simply invalid.
pub fn validate_whatsapp_url(url: &str) -> bool {
    match inspect_whatsapp_url(url) {
        Ok(_) => {
            tracing::debug!("WhatsApp URL accepted: {}", url);
            true
        }
        Err(rejection) => {
            tracing::warn!("WhatsApp URL rejected ({}): {}", rejection, url);
            false
        }
    }
}
