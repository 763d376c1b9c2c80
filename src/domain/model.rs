use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel text the site uses for prices, durations and levels of the custom tour.
pub const TO_BE_DETERMINED: &str = "a determinar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrice", into = "RawPrice")]
pub enum Price {
    Amount(u32),
    ToBeDetermined,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(u32),
    Text(String),
}

impl TryFrom<RawPrice> for Price {
    type Error = String;

    fn try_from(raw: RawPrice) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawPrice::Number(amount) => Ok(Price::Amount(amount)),
            RawPrice::Text(text) if text.trim().eq_ignore_ascii_case(TO_BE_DETERMINED) => {
                Ok(Price::ToBeDetermined)
            }
            RawPrice::Text(text) => Err(format!(
                "price must be a number or \"{}\", got \"{}\"",
                TO_BE_DETERMINED, text
            )),
        }
    }
}

impl From<Price> for RawPrice {
    fn from(price: Price) -> Self {
        match price {
            Price::Amount(amount) => RawPrice::Number(amount),
            Price::ToBeDetermined => RawPrice::Text(TO_BE_DETERMINED.to_string()),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => write!(f, "{}€", amount),
            Price::ToBeDetermined => f.write_str(TO_BE_DETERMINED),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourEntry {
    pub name: String,
    pub price: Price,
    pub duration: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideEntry {
    pub name: String,
    pub phone: String,
    pub specialty: String,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub website: String,
    pub main_phone: String,
    pub email: String,
    pub location: String,
}

/// Contact form fields as captured at submit time. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub tour: String,
    #[serde(default)]
    pub level: String,
    pub date: Option<String>,
    pub comments: Option<String>,
}

impl FormSubmission {
    /// Builds a submission from `name=value` pairs, the way a browser form
    /// serializes its fields. Unknown fields are ignored and empty optional
    /// fields become `None`; the last value wins for repeated names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = FormSubmission::default();
        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "name" => form.name = value,
                "email" => form.email = value,
                "phone" => form.phone = non_blank(value),
                "tour" => form.tour = value,
                "level" => form.level = value,
                "date" => form.date = non_blank(value),
                "comments" => form.comments = non_blank(value),
                other => tracing::debug!("Ignoring unknown form field: {}", other),
            }
        }
        form
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The data attributes of a clicked quick-contact button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickButton {
    pub classes: Vec<String>,
    pub tour: Option<String>,
    pub message: Option<String>,
}

impl QuickButton {
    pub const CLASS: &'static str = "whatsapp-btn";

    pub fn new(tour: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            classes: vec![Self::CLASS.to_string()],
            tour: Some(tour.into()),
            message: Some(message.into()),
        }
    }

    pub fn is_whatsapp_button(&self) -> bool {
        self.classes.iter().any(|class| class == Self::CLASS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageType {
    QuickInquiry,
    GeneralInquiry,
    Other(String),
}

impl MessageType {
    pub fn parse(value: &str) -> Self {
        match value {
            "consulta-rapida" | "quick-inquiry" => MessageType::QuickInquiry,
            "consulta-general" | "general-inquiry" => MessageType::GeneralInquiry,
            other => MessageType::Other(other.to_string()),
        }
    }
}

impl From<&str> for MessageType {
    fn from(value: &str) -> Self {
        MessageType::parse(value)
    }
}

/// Toast severity tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}
