use crate::domain::model::Severity;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Shows a transient message to the visitor (a toast on the site, a log line in the CLI).
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity, duration: Duration);
}

/// Sends the visitor to a URL. On the site this replaces the current page.
pub trait Navigator {
    fn navigate(&mut self, url: &str) -> Result<()>;
}

/// Asks the visitor a yes/no question before an irreversible action.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Key/value storage surviving between visits (`localStorage` on the site).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, severity: Severity, duration: Duration) {
        (**self).notify(message, severity, duration)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Confirmer + ?Sized> Confirmer for &C {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}
