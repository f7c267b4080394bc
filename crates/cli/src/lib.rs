//! `techhub` command-line front end.
//!
//! Stands in for the storefront's presentation layer: renders filtered catalog
//! views and feeds user actions back into a [`Storefront`].

pub mod cli;
pub mod render;
pub mod session;

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::Context;

use techhub_store::Storefront;

use crate::cli::{Cli, Command};
use crate::session::Session;

/// Execute `cli` against `store`, writing command output to `out`.
pub fn run(cli: Cli, store: &mut Storefront, out: &mut impl Write) -> anyhow::Result<()> {
    match cli.command {
        Command::List(args) => {
            let range = techhub_core::PriceRange::new(args.min, args.max)
                .context("invalid --min/--max")?;
            let products = store.filter_products(args.category, Some(range));
            if args.json {
                serde_json::to_writer_pretty(&mut *out, &products)?;
                writeln!(out)?;
            } else {
                render::product_list(out, &products)?;
            }
        }
        Command::Categories => render::categories(out)?,
        Command::Session { script } => {
            let mut session = Session::new(store);
            if script.as_os_str() == "-" {
                session.run(io::stdin().lock(), out)?;
            } else {
                let file = File::open(&script)
                    .with_context(|| format!("opening script {}", script.display()))?;
                session.run(BufReader::new(file), out)?;
            }
            render::cart(out, store)?;
        }
    }
    Ok(())
}
