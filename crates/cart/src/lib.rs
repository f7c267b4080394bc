//! Shopping cart domain module.
//!
//! An ordered, session-scoped list of chosen products. Pure in-memory state; it
//! is discarded when the session ends.

pub mod cart;

pub use cart::Cart;
