use core::str::FromStr;

use serde::{Deserialize, Serialize};

use techhub_core::{DomainError, Entity, PriceRange, ProductId};

/// Closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Laptops,
    Phones,
    Audio,
    Accessories,
    Gaming,
}

impl Category {
    /// All categories, in catalog generation order.
    pub const ALL: [Category; 5] = [
        Category::Laptops,
        Category::Phones,
        Category::Audio,
        Category::Accessories,
        Category::Gaming,
    ];

    /// Stable identifier used at the boundary (`"laptops"`, `"phones"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Laptops => "laptops",
            Category::Phones => "phones",
            Category::Audio => "audio",
            Category::Accessories => "accessories",
            Category::Gaming => "gaming",
        }
    }

    /// Human-facing label for category pickers.
    pub fn label(self) -> &'static str {
        match self {
            Category::Laptops => "Laptops",
            Category::Phones => "Smartphones",
            Category::Audio => "Audio",
            Category::Accessories => "Accessories",
            Category::Gaming => "Gaming",
        }
    }

    /// Singular noun used in generated descriptions.
    pub fn singular(self) -> &'static str {
        match self {
            Category::Laptops => "laptop",
            Category::Phones => "phone",
            Category::Audio => "audio device",
            Category::Accessories => "accessory",
            Category::Gaming => "gaming product",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s:?}")))
    }
}

/// Category constraint of a catalog query: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_ID: &'static str = "all";

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Every selectable filter: `All` first, then each category.
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        core::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        CategoryFilter::Only(value)
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CategoryFilter::All => f.pad(Self::ALL_ID),
            CategoryFilter::Only(c) => core::fmt::Display::fmt(c, f),
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.to_string()
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_ID {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// A purchasable product. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    /// Price in smallest currency unit.
    price: u64,
    image: String,
    category: Category,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        image: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
            category,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether this product passes a category + price query.
    pub fn matches(&self, category: CategoryFilter, range: PriceRange) -> bool {
        category.matches(self.category) && range.contains(self.price)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
