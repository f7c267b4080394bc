use serde::Serialize;

use techhub_catalog::Product;
use techhub_core::ProductId;

/// Ordered list of products chosen for purchase.
///
/// Append-only except for single-entry removal. Adding the same product twice
/// yields two entries sharing one id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `product` as a new entry. No duplicate check.
    pub fn add(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id_typed(), entries = self.entries.len() + 1, "cart entry added");
        self.entries.push(product);
    }

    /// Remove the first entry with `id` and return it.
    ///
    /// Later entries with the same id stay put. Returns `None`, leaving the
    /// cart untouched, when no entry matches.
    pub fn remove_first(&mut self, id: ProductId) -> Option<Product> {
        let Some(index) = self.entries.iter().position(|p| p.id_typed() == id) else {
            tracing::debug!(product_id = %id, "cart removal ignored: no matching entry");
            return None;
        };
        let removed = self.entries.remove(index);
        tracing::debug!(product_id = %id, index, entries = self.entries.len(), "cart entry removed");
        Some(removed)
    }

    /// Number of entries carrying `id`.
    pub fn quantity_of(&self, id: ProductId) -> usize {
        self.entries.iter().filter(|p| p.id_typed() == id).count()
    }

    /// Sum of entry prices, smallest currency unit.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(Product::price).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use techhub_catalog::Category;

    fn product(id: u32, price: u64) -> Product {
        Product::new(
            ProductId::new(id).unwrap(),
            format!("Product {id}"),
            "",
            price,
            "",
            Category::Gaming,
        )
    }

    fn ids(cart: &Cart) -> Vec<u32> {
        cart.iter().map(|p| p.id_typed().get()).collect()
    }

    #[test]
    fn add_appends_in_order() {
        let mut cart = Cart::new();
        cart.add(product(3, 100));
        cart.add(product(1, 200));
        assert_eq!(ids(&cart), vec![3, 1]);
        assert_eq!(cart.total(), 300);
    }

    #[test]
    fn duplicates_are_separate_entries() {
        let mut cart = Cart::new();
        cart.add(product(5, 100));
        cart.add(product(5, 100));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of(ProductId::new(5).unwrap()), 2);
    }

    #[test]
    fn remove_first_takes_only_the_first_match() {
        let mut cart = Cart::new();
        cart.add(product(1, 100));
        cart.add(product(2, 200));
        cart.add(product(1, 100));

        let removed = cart.remove_first(ProductId::new(1).unwrap());
        assert_eq!(removed.map(|p| p.id_typed().get()), Some(1));
        assert_eq!(ids(&cart), vec![2, 1]);
    }

    #[test]
    fn removing_absent_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(product(1, 100));
        let before = cart.clone();

        assert!(cart.remove_first(ProductId::new(9).unwrap()).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(product(1, 100));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: adding an id not yet in the cart and removing it restores the cart.
        #[test]
        fn add_then_remove_restores_cart(existing in prop::collection::vec(1u32..50, 0..20), new_id in 50u32..100) {
            let mut cart = Cart::new();
            for id in &existing {
                cart.add(product(*id, 100));
            }
            let before = cart.clone();

            cart.add(product(new_id, 700));
            let removed = cart.remove_first(ProductId::new(new_id).unwrap());

            prop_assert!(removed.is_some());
            prop_assert_eq!(cart, before);
        }

        /// Property: removal drops exactly one matching entry, the earliest one.
        #[test]
        fn remove_drops_exactly_one(entries in prop::collection::vec(1u32..5, 1..30), target in 1u32..5) {
            let mut cart = Cart::new();
            for id in &entries {
                cart.add(product(*id, 100));
            }
            let target_id = ProductId::new(target).unwrap();
            let before = cart.quantity_of(target_id);

            cart.remove_first(target_id);

            prop_assert_eq!(cart.quantity_of(target_id), before.saturating_sub(1));
            let mut expected = entries.clone();
            if let Some(pos) = expected.iter().position(|id| *id == target) {
                expected.remove(pos);
            }
            prop_assert_eq!(ids(&cart), expected);
        }
    }
}
