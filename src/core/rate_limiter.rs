use crate::domain::ports::Clock;
use chrono::{DateTime, Utc};
use std::time::Duration;

pub const DEFAULT_COOLDOWN_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The action may go ahead; the cooldown window has restarted.
    Ready,
    /// Refused. `remaining_secs` is rounded up for display.
    CoolingDown { remaining_secs: u64 },
}

/// Enforces a minimum pause between two WhatsApp openings so a double click
/// does not send the same inquiry twice.
#[derive(Debug)]
pub struct RateLimiter<C: Clock> {
    cooldown: Duration,
    last_permitted: Option<DateTime<Utc>>,
    clock: C,
}

impl<C: Clock> RateLimiter<C> {
    pub fn new(cooldown: Duration, clock: C) -> Self {
        Self {
            cooldown,
            last_permitted: None,
            clock,
        }
    }

    pub fn with_default_cooldown(clock: C) -> Self {
        Self::new(Duration::from_millis(DEFAULT_COOLDOWN_MS), clock)
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn check(&mut self) -> Admission {
        let now = self.clock.now();

        if let Some(last) = self.last_permitted {
            // A clock stepping backwards counts as no time elapsed.
            let elapsed = (now - last).to_std().unwrap_or(Duration::ZERO);
            if elapsed < self.cooldown {
                let remaining_ms = (self.cooldown - elapsed).as_millis() as u64;
                let remaining_secs = remaining_ms.div_ceil(1000);
                tracing::warn!("Wait {} seconds before the next submission", remaining_secs);
                return Admission::CoolingDown { remaining_secs };
            }
        }

        self.last_permitted = Some(now);
        Admission::Ready
    }

    pub fn can_proceed(&mut self) -> bool {
        matches!(self.check(), Admission::Ready)
    }

    pub fn reset(&mut self) {
        self.last_permitted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ManualClock;

    #[test]
    fn test_second_call_within_cooldown_is_refused() {
        let clock = ManualClock::default();
        let mut limiter = RateLimiter::with_default_cooldown(&clock);

        assert!(limiter.can_proceed());
        clock.advance(Duration::from_millis(1200));
        assert_eq!(limiter.check(), Admission::CoolingDown { remaining_secs: 2 });

        clock.advance(Duration::from_millis(1800));
        assert!(limiter.can_proceed());
    }

    #[test]
    fn test_refusal_does_not_restart_window() {
        let clock = ManualClock::default();
        let mut limiter = RateLimiter::new(Duration::from_millis(3000), &clock);

        assert!(limiter.can_proceed());
        clock.advance(Duration::from_millis(2999));
        assert_eq!(limiter.check(), Admission::CoolingDown { remaining_secs: 1 });
        clock.advance(Duration::from_millis(1));
        assert!(limiter.can_proceed());
        assert!(!limiter.can_proceed());
    }

    #[test]
    fn test_reset_returns_to_ready() {
        let clock = ManualClock::default();
        let mut limiter = RateLimiter::with_default_cooldown(&clock);

        assert!(limiter.can_proceed());
        assert!(!limiter.can_proceed());
        limiter.reset();
        assert!(limiter.can_proceed());
    }

    #[test]
    fn test_clock_going_backwards_keeps_cooling_down() {
        let clock = ManualClock::default();
        let mut limiter = RateLimiter::with_default_cooldown(&clock);

        assert!(limiter.can_proceed());
        clock.rewind(Duration::from_secs(10));
        assert_eq!(limiter.check(), Admission::CoolingDown { remaining_secs: 3 });
    }
}
