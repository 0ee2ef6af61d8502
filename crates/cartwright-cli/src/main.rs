//! cartwright — drive the shopping-cart engine from the command line.
//!
//! Each persistence slot is a JSON file in the store directory, standing in
//! for the browser's localStorage origin. Every subcommand is one dispatched
//! action: mutate, persist, re-render, print.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cartwright_core::{
    Action, CartError, CartService, CartWidget, Catalog, FileStore, ShopConfig, Surface,
    TableView,
};

#[derive(Parser)]
#[command(name = "cartwright", version, about = "Shopping cart for the demo storefront")]
struct Cli {
    /// Directory holding the persistence slots. Defaults to the platform
    /// data directory.
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Shop configuration file (JSON). A missing file means defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Product catalog file (JSON array of products).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a catalog product to the cart (repeat adds bump the quantity).
    Add { name: String },
    /// Print the cart table and totals.
    List,
    /// Overwrite the quantity of the row at INDEX with VALUE.
    Qty { index: usize, value: String },
    /// Remove the row at INDEX.
    Remove { index: usize },
    /// Apply a coupon code to the displayed totals.
    Coupon { code: String },
    /// Snapshot the cart for the invoice page.
    Checkout,
    /// Empty the cart.
    Clear,
    /// Print the effective shop configuration.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ShopConfig::load(path)?,
        None => ShopConfig::default(),
    };

    if matches!(cli.command, Command::Config) {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let store_dir = resolve_store_dir(cli.store_dir.as_deref())?;
    let store = FileStore::open(&store_dir)?;
    let service = CartService::open(store, config);
    let mut widget = CartWidget::new(service, Surface::cart_page());

    let outcome = match cli.command {
        Command::Add { name } => {
            let catalog_path = cli
                .catalog
                .context("adding a product requires --catalog")?;
            let catalog = Catalog::load(&catalog_path)?;
            let product = catalog
                .find(&name)
                .cloned()
                .ok_or(CartError::UnknownProduct(name))?;
            widget.dispatch(Action::Add(product))?
        }
        Command::List => {
            if let Some(table) = widget.render() {
                print_table(&table);
            }
            return Ok(());
        }
        Command::Qty { index, value } => widget.dispatch(Action::SetQuantity { index, value })?,
        Command::Remove { index } => widget.dispatch(Action::Remove { index })?,
        Command::Coupon { code } => widget.dispatch(Action::ApplyCoupon { code })?,
        Command::Checkout => widget.dispatch(Action::Checkout)?,
        Command::Clear => {
            widget.service_mut().clear()?;
            if let Some(table) = widget.render() {
                print_table(&table);
            }
            return Ok(());
        }
        Command::Config => return Ok(()),
    };

    if let Some(table) = &outcome.table {
        print_table(table);
    }
    if let Some(notice) = &outcome.notice {
        println!("{notice}");
    }
    if let Some(target) = &outcome.navigate {
        println!("Proceeding to {target}");
    }
    Ok(())
}

fn resolve_store_dir(flag: Option<&Path>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir.to_path_buf()),
        None => {
            let base = dirs::data_dir().context("no platform data directory; pass --store-dir")?;
            Ok(base.join("cartwright"))
        }
    }
}

fn print_table(view: &TableView) {
    if view.rows.is_empty() {
        println!("(cart is empty)");
    } else {
        println!(
            "{:>3}  {:<32} {:>10} {:>5} {:>10}  {}",
            "#", "product", "price", "qty", "subtotal", "image"
        );
        for row in &view.rows {
            println!(
                "{:>3}  {:<32} {:>10} {:>5} {:>10}  {}",
                row.index, row.name, row.unit_price, row.quantity, row.line_subtotal, row.image
            );
        }
    }
    println!("Cart Subtotal  {}", view.subtotal_cell);
    println!("Total          {}", view.total_cell);
}
