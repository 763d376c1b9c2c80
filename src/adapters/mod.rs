// Adapters layer: concrete implementations of the domain ports for the CLI
// and for embedding the contact flow in other hosts.

use crate::domain::model::Severity;
use crate::domain::ports::{Clock, Confirmer, Navigator, Notifier, PreferenceStore};
use crate::utils::error::{ContactError, Result};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Prints toasts on stderr and mirrors them into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity, duration: Duration) {
        match severity {
            Severity::Error => tracing::error!(?duration, "toast: {}", message),
            Severity::Warning => tracing::warn!(?duration, "toast: {}", message),
            Severity::Success | Severity::Info => tracing::info!(?duration, "toast: {}", message),
        }
        eprintln!("[{}] {}", severity.as_str(), message);
    }
}

/// Writes the target URL to stdout, one per line, instead of opening a browser.
pub struct StdoutNavigator<W: Write = std::io::Stdout> {
    out: W,
}

impl StdoutNavigator {
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl Default for StdoutNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutNavigator<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for StdoutNavigator<W> {
    fn navigate(&mut self, url: &str) -> Result<()> {
        writeln!(self.out, "{}", url).map_err(|e| ContactError::NavigationError {
            message: e.to_string(),
        })?;
        self.out.flush().map_err(|e| ContactError::NavigationError {
            message: e.to_string(),
        })
    }
}

/// Answers every confirmation with a fixed value (`--yes` on the CLI).
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirmer for AutoConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!("Auto-answering '{}' with {}", prompt, self.0);
        self.0
    }
}

/// Asks on stderr and reads a `y`/`s` answer from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirmer for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [s/N] ", prompt);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(
            answer.trim().to_lowercase().as_str(),
            "s" | "si" | "sí" | "y" | "yes"
        )
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.shift(|now| now + to_delta(by));
    }

    pub fn rewind(&self, by: Duration) {
        self.shift(|now| now - to_delta(by));
    }

    fn shift(&self, f: impl FnOnce(DateTime<Utc>) -> DateTime<Utc>) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now = f(*now);
    }
}

fn to_delta(by: Duration) -> TimeDelta {
    TimeDelta::milliseconds(by.as_millis() as i64)
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
