//! Trailing-edge debounce for rapid successive inputs.
//!
//! Time is passed in by the caller rather than read from a clock, so the event
//! loop decides when to poll and tests can step time explicitly.

use std::time::{Duration, Instant};

/// Collapses a burst of values into the last one, released once `delay` has
/// elapsed without a newer value arriving.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing (and cancelling) any value still pending.
    ///
    /// Returns `true` if an earlier value was superseded.
    pub fn submit(&mut self, value: T, now: Instant) -> bool {
        let deadline = now + self.delay;
        self.pending.replace(Pending { value, deadline }).is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Release the pending value if its deadline has passed. A released value
    /// is handed out exactly once.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Release the pending value immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn nothing_released_before_deadline() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        assert!(!d.submit(1, t0));
        assert_eq!(d.poll(t0 + Duration::from_millis(299)), None);
        assert_eq!(d.poll(t0 + DELAY), Some(1));
        assert_eq!(d.poll(t0 + DELAY * 2), None);
    }

    #[test]
    fn burst_collapses_to_last_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        for (i, value) in [10, 20, 30, 40].into_iter().enumerate() {
            d.submit(value, t0 + Duration::from_millis(100 * i as u64));
        }
        // deadline restarts with each submit: last one at 300ms
        assert_eq!(d.poll(t0 + Duration::from_millis(599)), None);
        assert_eq!(d.pending(), Some(&40));
        assert_eq!(d.poll(t0 + Duration::from_millis(600)), Some(40));
        assert!(!d.is_pending());
    }

    #[test]
    fn submit_reports_superseded_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.submit("a", t0);
        assert!(d.submit("b", t0));
        assert_eq!(d.deadline(), Some(t0 + DELAY));
    }

    #[test]
    fn cancel_and_flush() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.submit(1, t0);
        d.cancel();
        assert_eq!(d.poll(t0 + DELAY), None);

        d.submit(2, t0);
        assert_eq!(d.flush(), Some(2));
        assert_eq!(d.flush(), None);
    }
}
