use serde::Serialize;

use techhub_cart::Cart;
use techhub_catalog::{Catalog, CatalogGenerator, CategoryFilter, Product};
use techhub_core::{DomainError, DomainResult, PriceRange, ProductId};

/// Catalog + cart + active price filter for one shopping session.
///
/// All mutation goes through the methods below; queries never mutate.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    price_range: PriceRange,
}

/// Serializable view of the session state handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontSnapshot<'a> {
    pub products: Vec<&'a Product>,
    pub cart: &'a Cart,
    pub cart_total: u64,
    pub price_range: PriceRange,
}

impl Storefront {
    /// Open a session over `catalog` with an empty cart and the full price range.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            price_range: PriceRange::FULL,
        }
    }

    /// Open a session over a freshly generated, reproducible sample catalog.
    pub fn with_sample_catalog(seed: u64) -> Self {
        Self::new(CatalogGenerator::new().generate_with_seed(seed))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.total()
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// Append `product` to the cart.
    ///
    /// Only products of this store's catalog are accepted; anything else is
    /// rejected as `NotFound` and the cart is left unchanged.
    pub fn add_to_cart(&mut self, product: &Product) -> DomainResult<()> {
        match self.catalog.get(product.id_typed()) {
            Some(listed) if listed == product => {
                self.cart.add(listed.clone());
                Ok(())
            }
            _ => {
                tracing::warn!(product_id = %product.id_typed(), "rejected product not in catalog");
                Err(DomainError::not_found())
            }
        }
    }

    /// Append the catalog product with `id` to the cart.
    pub fn add_to_cart_by_id(&mut self, id: ProductId) -> DomainResult<&Product> {
        let Some(product) = self.catalog.get(id) else {
            tracing::warn!(product_id = %id, "rejected unknown product id");
            return Err(DomainError::not_found());
        };
        self.cart.add(product.clone());
        Ok(product)
    }

    /// Remove the first cart entry with `id`, if any.
    ///
    /// An id with no cart entry is a no-op and yields `None`.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<Product> {
        self.cart.remove_first(id)
    }

    /// Empty the cart (session end).
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Replace the active price filter.
    pub fn set_price_range(&mut self, range: PriceRange) {
        tracing::debug!(low = range.low(), high = range.high(), "price range updated");
        self.price_range = range;
    }

    /// Replace the active price filter from raw bounds.
    ///
    /// Rejects `low > high` and bounds above the ceiling; the active filter is
    /// left unchanged on error.
    pub fn set_price_bounds(&mut self, low: u64, high: u64) -> DomainResult<()> {
        let range = PriceRange::new(low, high).inspect_err(|e| {
            tracing::warn!(low, high, error = %e, "rejected price range");
        })?;
        self.set_price_range(range);
        Ok(())
    }

    /// Catalog-ordered products in `category` priced within `range`, or within
    /// the active filter when `range` is `None`.
    pub fn filter_products(
        &self,
        category: CategoryFilter,
        range: Option<PriceRange>,
    ) -> Vec<&Product> {
        self.catalog
            .filter(category, range.unwrap_or(self.price_range))
    }

    pub fn snapshot(&self, category: CategoryFilter) -> StorefrontSnapshot<'_> {
        StorefrontSnapshot {
            products: self.filter_products(category, None),
            cart: &self.cart,
            cart_total: self.cart_total(),
            price_range: self.price_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techhub_catalog::Category;

    fn id(n: u32) -> ProductId {
        ProductId::new(n).unwrap()
    }

    fn store() -> Storefront {
        let catalog = Catalog::from_products(vec![
            Product::new(id(1), "DevBook", "", 60_000, "", Category::Laptops),
            Product::new(id(2), "Pixel Pro", "", 45_000, "", Category::Phones),
            Product::new(id(3), "PodsBuds", "", 3_000, "", Category::Audio),
        ])
        .unwrap();
        Storefront::new(catalog)
    }

    #[test]
    fn starts_empty_with_full_range() {
        let store = store();
        assert!(store.cart().is_empty());
        assert_eq!(store.price_range(), PriceRange::FULL);
    }

    #[test]
    fn add_to_cart_rejects_foreign_products() {
        let mut store = store();
        let foreign = Product::new(id(99), "Toaster", "", 100, "", Category::Accessories);
        assert_eq!(store.add_to_cart(&foreign), Err(DomainError::NotFound));

        // same id, different listing
        let forged = Product::new(id(1), "DevBook", "", 1, "", Category::Laptops);
        assert_eq!(store.add_to_cart(&forged), Err(DomainError::NotFound));
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn add_by_id_returns_the_listed_product() {
        let mut store = store();
        let added = store.add_to_cart_by_id(id(2)).unwrap();
        assert_eq!(added.name(), "Pixel Pro");
        assert!(store.add_to_cart_by_id(id(42)).is_err());
        assert_eq!(store.cart_total(), 45_000);
    }

    #[test]
    fn inverted_bounds_leave_filter_unchanged() {
        let mut store = store();
        store.set_price_bounds(1_000, 50_000).unwrap();
        let err = store.set_price_bounds(9_000, 100).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.price_range(), PriceRange::new(1_000, 50_000).unwrap());
    }

    #[test]
    fn filter_uses_active_range_unless_overridden() {
        let mut store = store();
        store.set_price_bounds(0, 50_000).unwrap();

        let names = |v: Vec<&Product>| v.iter().map(|p| p.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names(store.filter_products(CategoryFilter::All, None)), ["Pixel Pro", "PodsBuds"]);
        assert_eq!(
            names(store.filter_products(CategoryFilter::All, Some(PriceRange::FULL))),
            ["DevBook", "Pixel Pro", "PodsBuds"]
        );
    }

    #[test]
    fn snapshot_serializes_visible_state() {
        let mut store = store();
        store.add_to_cart_by_id(id(3)).unwrap();
        let json = serde_json::to_value(store.snapshot(Category::Audio.into())).unwrap();
        assert_eq!(json["cart_total"], 3_000);
        assert_eq!(json["price_range"], serde_json::json!([0, 150_000]));
        assert_eq!(json["products"].as_array().unwrap().len(), 1);
        assert_eq!(json["cart"][0]["name"], "PodsBuds");
    }
}
