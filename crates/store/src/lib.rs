//! Store state container.
//!
//! [`Storefront`] owns the catalog, the cart and the active price filter and is
//! the single source of truth handed (by reference) to the presentation layer.
//! [`PriceRangeSlider`] models the debounced two-thumb price input feeding it.

pub mod debounce;
pub mod slider;
pub mod storefront;

pub use debounce::Debouncer;
pub use slider::{DEFAULT_DEBOUNCE, PriceRangeSlider};
pub use storefront::{Storefront, StorefrontSnapshot};
