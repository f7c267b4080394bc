//! Image-reference lookup for generated products.

use crate::product::Category;

/// Produces the opaque image URL attached to a product.
///
/// `cache_buster` is drawn by the caller so that lookups stay deterministic for
/// a given randomness source.
pub trait ImageLookup {
    fn image_url(
        &self,
        category: Category,
        name: &str,
        variant: Option<&str>,
        cache_buster: u32,
    ) -> String;
}

/// Stock-photo search URLs on Unsplash's "featured" endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsplashImages {
    base_url: String,
}

impl UnsplashImages {
    pub const DEFAULT_BASE_URL: &'static str = "https://source.unsplash.com/featured/300x200?";

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn search_terms(category: Category, name: &str) -> &'static str {
        let name = name.to_lowercase();
        let has = |kw: &str| name.contains(kw);
        match category {
            Category::Laptops => "laptop,computer",
            Category::Phones => "smartphone,mobile",
            Category::Audio if has("headphone") => "headphones",
            Category::Audio if has("earbuds") => "earbuds",
            Category::Audio => "audio",
            Category::Accessories if has("monitor") => "monitor",
            Category::Accessories if has("keyboard") => "keyboard",
            Category::Accessories if has("mouse") => "mouse",
            Category::Accessories if has("charger") => "charger",
            Category::Accessories => "tech,accessory",
            Category::Gaming if has("playstation") => "playstation",
            Category::Gaming if has("xbox") => "xbox",
            Category::Gaming if has("nintendo") => "nintendo",
            Category::Gaming if has("chair") => "gaming,chair",
            Category::Gaming => "gaming",
        }
    }
}

impl Default for UnsplashImages {
    fn default() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }
}

impl ImageLookup for UnsplashImages {
    fn image_url(
        &self,
        category: Category,
        name: &str,
        variant: Option<&str>,
        cache_buster: u32,
    ) -> String {
        let mut terms = Self::search_terms(category, name).to_string();
        // Pro/Lite say nothing about what the product looks like.
        if let Some(variant) = variant.filter(|v| !matches!(*v, "Pro" | "Lite")) {
            terms.push(',');
            terms.push_str(&variant.to_lowercase());
        }
        format!("{}{}&random={}", self.base_url, terms, cache_buster)
    }
}
