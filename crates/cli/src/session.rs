//! Scripted shopping sessions.
//!
//! One action per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! filter phones
//! range 10000 60000
//! list
//! add 27
//! remove 27
//! cart
//! ```

use core::str::FromStr;
use std::io::{BufRead, Write};

use anyhow::Context;

use techhub_catalog::CategoryFilter;
use techhub_core::{DomainError, ProductId};
use techhub_store::Storefront;

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add(ProductId),
    Remove(ProductId),
    Range { low: u64, high: u64 },
    Filter(CategoryFilter),
    List,
    Cart,
}

impl Action {
    /// Parse one script line; `None` for blank lines and comments.
    pub fn parse_line(line: &str) -> Result<Option<Self>, DomainError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let bound = |raw: &str| {
            raw.parse::<u64>()
                .map_err(|e| DomainError::validation(format!("price bound {raw:?}: {e}")))
        };

        match (verb, args.as_slice()) {
            ("add", [id]) => Ok(Action::Add(id.parse()?)),
            ("remove", [id]) => Ok(Action::Remove(id.parse()?)),
            ("range", [low, high]) => Ok(Action::Range {
                low: bound(*low)?,
                high: bound(*high)?,
            }),
            ("filter", [category]) => Ok(Action::Filter(category.parse()?)),
            ("list", []) => Ok(Action::List),
            ("cart", []) => Ok(Action::Cart),
            _ => Err(DomainError::validation(format!("unrecognised action: {s:?}"))),
        }
    }
}

/// Presentation-side session state: the store plus the selected category.
pub struct Session<'a> {
    store: &'a mut Storefront,
    category: CategoryFilter,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a mut Storefront) -> Self {
        Self {
            store,
            category: CategoryFilter::All,
        }
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn apply(&mut self, action: Action, out: &mut impl Write) -> anyhow::Result<()> {
        tracing::debug!(?action, "session action");
        match action {
            Action::Add(id) => {
                let product = self.store.add_to_cart_by_id(id)?;
                writeln!(out, "added {} ({})", product.name(), render::format_price(product.price()))?;
            }
            Action::Remove(id) => match self.store.remove_from_cart(id) {
                Some(product) => writeln!(out, "removed {}", product.name())?,
                None => writeln!(out, "product {id} is not in the cart")?,
            },
            Action::Range { low, high } => {
                self.store.set_price_bounds(low, high)?;
                writeln!(
                    out,
                    "price range {} - {}",
                    render::format_price(low),
                    render::format_price(high)
                )?;
            }
            Action::Filter(category) => {
                self.category = category;
                writeln!(out, "category {}", category.label())?;
            }
            Action::List => {
                let products = self.store.filter_products(self.category, None);
                render::product_list(out, &products)?;
            }
            Action::Cart => render::cart(out, &*self.store)?,
        }
        Ok(())
    }

    /// Run every action of `script`, stopping at the first failing line.
    pub fn run(&mut self, script: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        for (index, line) in script.lines().enumerate() {
            let line_no = index + 1;
            let line = line.with_context(|| format!("reading script line {line_no}"))?;
            let Some(action) =
                Action::parse_line(&line).with_context(|| format!("script line {line_no}"))?
            else {
                continue;
            };
            self.apply(action, out)
                .with_context(|| format!("script line {line_no}: {}", line.trim()))?;
        }
        Ok(())
    }
}
