use std::collections::HashSet;

use serde::Serialize;

use techhub_core::{DomainError, DomainResult, PriceRange, ProductId};

use crate::product::{CategoryFilter, Product};

/// The fixed, ordered set of purchasable products.
///
/// Built once and never mutated afterwards; every product id is unique.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from externally supplied products, rejecting duplicate ids.
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id_typed()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {} in catalog",
                    product.id_typed()
                )));
            }
        }
        Ok(Self { products })
    }

    /// Products produced by the generator already carry sequential ids.
    pub(crate) fn from_generated(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Catalog-ordered subsequence of products matching `category` whose price
    /// lies inside `range` (inclusive).
    pub fn filter(&self, category: CategoryFilter, range: PriceRange) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches(category, range))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
