//! Catalog domain module.
//!
//! Products, their categories, the immutable catalog and the sample-data
//! generator that fills it. Pure domain logic: the only "IO" is building opaque
//! image URL strings through an [`ImageLookup`].

pub mod catalog;
pub mod generator;
pub mod image;
pub mod product;

pub use catalog::Catalog;
pub use generator::{CatalogGenerator, Edition, PRICE_STEP, PriceBounds, SPECIAL_EDITIONS, base_names};
pub use image::{ImageLookup, UnsplashImages};
pub use product::{Category, CategoryFilter, Product};
