//! Plain-text rendering of products, carts and prices.

use std::io::{self, Write};

use techhub_catalog::{CategoryFilter, Product};
use techhub_store::Storefront;

/// Format `amount` as rupees with Indian digit grouping (`₹1,50,000`).
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }
    let (head, last3) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("₹{},{}", groups.join(","), last3)
}

pub fn product_line(out: &mut impl Write, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "{:>4}  {:<32} {:<12} {:>10}",
        product.id_typed(),
        product.name(),
        product.category(),
        format_price(product.price())
    )
}

pub fn product_list(out: &mut impl Write, products: &[&Product]) -> io::Result<()> {
    for product in products {
        product_line(out, product)?;
    }
    writeln!(out, "Showing {} products", products.len())
}

pub fn categories(out: &mut impl Write) -> io::Result<()> {
    for choice in CategoryFilter::choices() {
        writeln!(out, "{:<12} {}", choice.to_string(), choice.label())?;
    }
    Ok(())
}

pub fn cart(out: &mut impl Write, store: &Storefront) -> io::Result<()> {
    if store.cart().is_empty() {
        return writeln!(out, "Your cart is empty");
    }
    for product in store.cart() {
        product_line(out, product)?;
    }
    writeln!(
        out,
        "{} items, total: {}",
        store.cart_count(),
        format_price(store.cart_total())
    )
}
