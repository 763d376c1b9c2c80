pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod i18n;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::site_config::SiteConfig;
pub use self::core::{
    catalog::Catalog,
    encoder::{encode_whatsapp_message, generate_whatsapp_url},
    form_handler::{process_form_to_whatsapp, ContactHandler},
    opener::SecureOpener,
    rate_limiter::RateLimiter,
    security::validate_whatsapp_url,
};
pub use utils::error::{ContactError, Result};
