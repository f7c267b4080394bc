//! Two-thumb price slider input model.

use std::time::{Duration, Instant};

use techhub_core::PriceRange;

use crate::debounce::Debouncer;
use crate::storefront::Storefront;

/// Delay between the last slider movement and the filter update.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Local slider state plus the debounced propagation into a [`Storefront`].
///
/// The displayed value follows every movement immediately; the store's filter
/// only changes once input settles.
#[derive(Debug, Clone)]
pub struct PriceRangeSlider {
    track: PriceRange,
    value: PriceRange,
    debouncer: Debouncer<PriceRange>,
}

impl PriceRangeSlider {
    /// Slider over the full price domain, starting at `initial`.
    pub fn new(initial: PriceRange, delay: Duration) -> Self {
        Self::with_track(PriceRange::FULL, initial, delay)
    }

    /// Slider whose thumbs cannot leave `track`.
    pub fn with_track(track: PriceRange, initial: PriceRange, delay: Duration) -> Self {
        let value = PriceRange::clamped(
            initial.low().max(track.low()),
            initial.high().clamp(track.low(), track.high()),
        );
        Self {
            track,
            value,
            debouncer: Debouncer::new(delay),
        }
    }

    /// Slider mirroring the store's active filter.
    pub fn for_store(store: &Storefront, delay: Duration) -> Self {
        Self::new(store.price_range(), delay)
    }

    pub fn track(&self) -> PriceRange {
        self.track
    }

    /// Currently displayed range (may be ahead of the store's filter).
    pub fn value(&self) -> PriceRange {
        self.value
    }

    pub fn has_pending_update(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Move the lower thumb; it stops at the upper thumb.
    pub fn set_low(&mut self, low: u64, now: Instant) -> PriceRange {
        let low = low.clamp(self.track.low(), self.track.high());
        self.moved(self.value.with_low(low), now)
    }

    /// Move the upper thumb; it stops at the lower thumb.
    pub fn set_high(&mut self, high: u64, now: Instant) -> PriceRange {
        let high = high.clamp(self.track.low(), self.track.high());
        self.moved(self.value.with_high(high), now)
    }

    fn moved(&mut self, value: PriceRange, now: Instant) -> PriceRange {
        self.value = value;
        if self.debouncer.submit(value, now) {
            tracing::trace!(%value, "slider update superseded");
        }
        value
    }

    /// Apply the settled value to `store` once the debounce delay has passed.
    ///
    /// Returns the applied range; at most one update per burst of movements.
    pub fn tick(&mut self, now: Instant, store: &mut Storefront) -> Option<PriceRange> {
        let range = self.debouncer.poll(now)?;
        store.set_price_range(range);
        Some(range)
    }

    /// Apply any pending value right away.
    pub fn flush(&mut self, store: &mut Storefront) -> Option<PriceRange> {
        let range = self.debouncer.flush()?;
        store.set_price_range(range);
        Some(range)
    }
}
