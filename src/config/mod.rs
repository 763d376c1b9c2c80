#[cfg(feature = "cli")]
pub mod cli;
pub mod site_config;

pub use site_config::{SiteConfig, WhatsAppConfig};
