pub mod catalog;
pub mod encoder;
pub mod form_handler;
pub mod message_builder;
pub mod opener;
pub mod rate_limiter;
pub mod security;

pub use crate::domain::model::{FormSubmission, GuideEntry, MessageType, QuickButton, Severity};
pub use crate::domain::ports::{Clock, Confirmer, Navigator, Notifier, PreferenceStore};
pub use crate::utils::error::Result;
