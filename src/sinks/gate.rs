//! Minimum-interval throttle for expensive side effects.

use crate::events::Timestamp;

/// Suppresses repeated side effects within a minimum interval.
///
/// Inbound event frequency is producer-controlled and unbounded; the gate
/// bounds the rate of whatever the caller does on the `true` path (network
/// writes, attachment uploads). The gate starts open — the first call
/// always fires.
#[derive(Debug, Clone)]
pub struct RateGate {
    min_interval: f64,
    last_fire: Option<Timestamp>,
}

impl RateGate {
    pub fn new(min_interval: f64) -> Self {
        Self {
            min_interval,
            last_fire: None,
        }
    }

    /// Returns `true` and records `now` iff at least `min_interval` has
    /// passed since the last accepted event. The `false` path mutates
    /// nothing, so a burst of rejected events does not push the window out.
    pub fn try_fire(&mut self, now: Timestamp) -> bool {
        match self.last_fire {
            Some(last) if now - last < self.min_interval => false,
            _ => {
                self.last_fire = Some(now);
                true
            }
        }
    }

    /// Timestamp of the last accepted event, if any.
    pub fn last_fire(&self) -> Option<Timestamp> {
        self.last_fire
    }
}
