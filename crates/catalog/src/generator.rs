//! Sample catalog generation.
//!
//! The structure of the catalog (categories, base names, variants) is fixed;
//! prices, special editions and image cache-busters come from the injected
//! randomness source. Seeding that source makes a catalog reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use techhub_core::{PRICE_CEILING, ProductId};

use crate::catalog::Catalog;
use crate::image::{ImageLookup, UnsplashImages};
use crate::product::{Category, Product};

/// Generated prices are whole multiples of this unit.
pub const PRICE_STEP: u64 = 100;

/// Suffixes for the optional special-edition variant.
pub const SPECIAL_EDITIONS: [&str; 5] = ["Premium", "Ultra", "Max", "Plus", "Elite"];

/// Chance that a base name also gets a special edition.
const SPECIAL_EDITION_PROBABILITY: f64 = 0.5;

const LAPTOP_NAMES: [&str; 10] = [
    "UltraBook Pro",
    "PowerLaptop",
    "DevBook",
    "GamerLaptop X",
    "SlimBook Air",
    "WorkStation Pro",
    "StudentBook",
    "CreatorLaptop",
    "TravelBook Lite",
    "BusinessBook Elite",
];

const PHONE_NAMES: [&str; 10] = [
    "Galaxy Ultra",
    "iPhoneX Pro",
    "Pixel Pro",
    "OnePlus Ultra",
    "Redmi Note",
    "Vivo Pro",
    "Oppo Find",
    "Realme GT",
    "Nothing Phone",
    "Moto Edge",
];

const AUDIO_NAMES: [&str; 10] = [
    "SoundBuds Pro",
    "NoiseCancel X",
    "BassBoost Headphones",
    "TrueWireless Earbuds",
    "StudioSound Pro",
    "GamingHeadset X",
    "AudiophileX",
    "PodsBuds",
    "SurroundSound 7.1",
    "MusicMaster Pro",
];

const ACCESSORY_NAMES: [&str; 10] = [
    "Ultra Monitor",
    "MechKeyboard RGB",
    "GamingMouse Pro",
    "USB-C Hub",
    "Wireless Charger",
    "Power Bank 20000mAh",
    "Laptop Stand",
    "Phone Gimbal",
    "Camera Tripod",
    "External SSD",
];

const GAMING_NAMES: [&str; 10] = [
    "PlayStation 5",
    "Xbox Series X",
    "Nintendo Switch",
    "Gaming PC Ultra",
    "VR Headset Pro",
    "Gaming Controller",
    "Racing Wheel",
    "Gaming Chair",
    "RGB Light Strip",
    "Gaming Router",
];

/// Inclusive price bounds, expressed in `PRICE_STEP` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: u64,
    pub max: u64,
}

impl PriceBounds {
    /// Largest bound that still fits under the filter ceiling.
    const CAP: u64 = PRICE_CEILING / PRICE_STEP;

    /// Base bounds of a category.
    pub fn for_category(category: Category) -> Self {
        let (min, max) = match category {
            Category::Laptops => (400, 1500),
            Category::Phones => (150, 1200),
            Category::Audio => (20, 300),
            Category::Accessories => (10, 250),
            Category::Gaming => (50, 800),
        };
        Self { min, max }
    }

    /// Scale both bounds by `percent`, rounding to nearest and capping at the
    /// filter ceiling.
    pub fn scaled(self, percent: u64) -> Self {
        let scale = |v: u64| ((v * percent + 50) / 100).min(Self::CAP);
        let max = scale(self.max);
        Self {
            min: scale(self.min).min(max),
            max,
        }
    }

    /// Bounds in the smallest currency unit.
    pub fn in_currency(self) -> (u64, u64) {
        (self.min * PRICE_STEP, self.max * PRICE_STEP)
    }

    fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> u64 {
        rng.gen_range(self.min..=self.max) * PRICE_STEP
    }
}

/// Which flavour of a base name a generated product is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    Base,
    Pro,
    Lite,
    Special(&'static str),
}

impl Edition {
    /// The guaranteed second variant: Lite for names already marketed as Pro.
    pub fn paired_with(base_name: &str) -> Self {
        if base_name.contains("Pro") {
            Edition::Lite
        } else {
            Edition::Pro
        }
    }

    pub fn price_percent(self) -> u64 {
        match self {
            Edition::Base => 100,
            Edition::Pro => 120,
            Edition::Lite => 70,
            Edition::Special(_) => 150,
        }
    }

    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Edition::Base => None,
            Edition::Pro => Some("Pro"),
            Edition::Lite => Some("Lite"),
            Edition::Special(s) => Some(s),
        }
    }

    /// Price bounds of this edition within `category`.
    pub fn bounds(self, category: Category) -> PriceBounds {
        PriceBounds::for_category(category).scaled(self.price_percent())
    }

    fn product_name(self, base_name: &str) -> String {
        match self.suffix() {
            Some(suffix) => format!("{base_name} {suffix}"),
            None => base_name.to_string(),
        }
    }

    fn description(self, category: Category, base_name: &str) -> String {
        match self {
            Edition::Base => format!("High-quality {} with premium features", category.singular()),
            Edition::Pro => format!("Advanced version of the {base_name}"),
            Edition::Lite => format!("Budget-friendly version of the {base_name}"),
            Edition::Special(_) => format!("Special edition {base_name} with exclusive features"),
        }
    }
}

/// Base names offered in `category`.
pub fn base_names(category: Category) -> &'static [&'static str] {
    match category {
        Category::Laptops => &LAPTOP_NAMES,
        Category::Phones => &PHONE_NAMES,
        Category::Audio => &AUDIO_NAMES,
        Category::Accessories => &ACCESSORY_NAMES,
        Category::Gaming => &GAMING_NAMES,
    }
}

/// Builds the sample catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogGenerator<I = UnsplashImages> {
    images: I,
}

impl CatalogGenerator<UnsplashImages> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: ImageLookup> CatalogGenerator<I> {
    pub fn with_images(images: I) -> Self {
        Self { images }
    }

    /// Generate a reproducible catalog from `seed`.
    pub fn generate_with_seed(&self, seed: u64) -> Catalog {
        tracing::debug!(seed, "seeding catalog generator");
        self.generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Generate a catalog drawing all randomness from `rng`.
    ///
    /// Ids run from 1 in generation order: categories in [`Category::ALL`]
    /// order, each base name followed by its variants.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Catalog {
        let mut products = Vec::new();
        let mut next_id = ProductId::FIRST;

        for category in Category::ALL {
            for &name in base_names(category) {
                let mut push = |edition: Edition, rng: &mut R| {
                    products.push(self.build(next_id, category, name, edition, rng));
                    next_id = next_id.next();
                };

                push(Edition::Base, &mut *rng);
                push(Edition::paired_with(name), &mut *rng);

                if rng.gen_bool(SPECIAL_EDITION_PROBABILITY) {
                    let suffix = SPECIAL_EDITIONS[rng.gen_range(0..SPECIAL_EDITIONS.len())];
                    push(Edition::Special(suffix), &mut *rng);
                }
            }
        }

        tracing::info!(products = products.len(), "catalog generated");
        Catalog::from_generated(products)
    }

    fn build<R: Rng + ?Sized>(
        &self,
        id: ProductId,
        category: Category,
        base_name: &str,
        edition: Edition,
        rng: &mut R,
    ) -> Product {
        let price = edition.bounds(category).draw(rng);
        let cache_buster = rng.gen_range(0..1000);
        let image = self
            .images
            .image_url(category, base_name, edition.suffix(), cache_buster);
        Product::new(
            id,
            edition.product_name(base_name),
            edition.description(category, base_name),
            price,
            image,
            category,
        )
    }
}
