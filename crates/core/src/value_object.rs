//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. A `PriceRange` of `[0, 5000]` equals any other
//! `[0, 5000]`, whereas two products with the same name are still distinct
//! entities when their ids differ.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values (see `PriceRange::with_low`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
