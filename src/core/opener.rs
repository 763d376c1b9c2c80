use crate::core::rate_limiter::{Admission, RateLimiter};
use crate::core::security::inspect_whatsapp_url;
use crate::domain::model::Severity;
use crate::domain::ports::{Clock, Navigator, Notifier};
use std::time::Duration;

/// The only path from a built WhatsApp link to an actual navigation:
/// rate limit first, then URL validation, then the navigator.
pub struct SecureOpener<N: Notifier, V: Navigator, C: Clock> {
    limiter: RateLimiter<C>,
    notifier: N,
    navigator: V,
}

impl<N: Notifier, V: Navigator, C: Clock> SecureOpener<N, V, C> {
    pub fn new(limiter: RateLimiter<C>, notifier: N, navigator: V) -> Self {
        Self {
            limiter,
            notifier,
            navigator,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn navigator(&self) -> &V {
        &self.navigator
    }

    pub fn rate_limiter_mut(&mut self) -> &mut RateLimiter<C> {
        &mut self.limiter
    }

    /// Returns whether the page was sent to WhatsApp. Every refusal is
    /// reported to the visitor through the notifier.
    pub fn open_whatsapp_securely(&mut self, url: &str) -> bool {
        tracing::debug!("Checking WhatsApp URL before opening");

        if let Admission::CoolingDown { remaining_secs } = self.limiter.check() {
            tracing::debug!("Open refused, {}s of cooldown left", remaining_secs);
            self.notifier.notify(
                &format!("⏳ Espera {} segundos antes de enviar otra consulta", remaining_secs),
                Severity::Warning,
                Duration::from_millis(3000),
            );
            return false;
        }

        if let Err(rejection) = inspect_whatsapp_url(url) {
            tracing::error!("Blocked redirect to invalid WhatsApp URL ({}): {}", rejection, url);
            self.notifier.notify(
                "❌ Error: URL de WhatsApp inválida",
                Severity::Error,
                Duration::from_millis(4000),
            );
            return false;
        }

        match self.navigator.navigate(url) {
            Ok(()) => {
                tracing::info!("Opening WhatsApp: {}", url);
                self.notifier.notify(
                    "📱 Abriendo WhatsApp...",
                    Severity::Success,
                    Duration::from_millis(2000),
                );
                true
            }
            Err(e) => {
                tracing::error!("Could not open WhatsApp: {}", e);
                self.notifier.notify(
                    "❌ Error abriendo WhatsApp",
                    Severity::Error,
                    Duration::from_millis(4000),
                );
                false
            }
        }
    }
}
