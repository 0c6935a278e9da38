use std::time::{Duration, Instant};

/// Lets something happen at most once per period of wall clock time. The first check always
/// fires.
#[derive(Clone, Debug)]
pub struct Gate {
    period: Duration,
    last: Option<Instant>,
}

impl Gate {
    pub fn new(period: Duration) -> Self {
        Gate { period, last: None }
    }

    /// Returns true (and restarts the period) if more than a period passed since the last time
    /// this returned true.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) <= self.period => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
