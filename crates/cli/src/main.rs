//! Orchard CLI - catalog and cart management tools.
//!
//! # Usage
//!
//! ```bash
//! # Write the demo catalog to the configured catalog path
//! orchard seed
//!
//! # Browse the catalog with filters
//! orchard browse --search keyboard --category Electronics --sort price_asc
//!
//! # Manage the persisted cart
//! orchard cart add p1 2
//! orchard cart set p1 5
//! orchard cart show
//! orchard cart clear
//! ```
//!
//! # Commands
//!
//! - `seed` - Write the demo product catalog
//! - `browse` - Filter and sort the catalog
//! - `cart` - Add, remove, update, show, or clear cart lines

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "orchard")]
#[command(author, version, about = "Orchard storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the demo product catalog
    Seed,
    /// Filter and sort the catalog
    Browse {
        /// Substring matched against product name or description
        #[arg(long, default_value = "")]
        search: String,

        /// Category to include (repeatable; none means all)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Minimum list price
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum list price
        #[arg(long)]
        max_price: Option<String>,

        /// Sort order: `price_asc`, `price_desc`, `name_asc`, `newest`
        #[arg(long, default_value = "newest")]
        sort: String,

        /// Only products with stock on hand
        #[arg(long)]
        in_stock: bool,

        /// Only products with an active discount
        #[arg(long)]
        on_sale: bool,
    },
    /// Manage the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add units of a product (merges with an existing line)
    Add {
        /// Product ID
        product_id: String,

        /// Units to add
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product's line
    Remove {
        /// Product ID
        product_id: String,
    },
    /// Overwrite the quantity of an existing line (0 removes it)
    Set {
        /// Product ID
        product_id: String,

        /// New quantity
        quantity: u32,
    },
    /// Print the cart with line totals
    Show,
    /// Empty the cart and remove the persisted key
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run()?,
        Commands::Browse {
            search,
            categories,
            min_price,
            max_price,
            sort,
            in_stock,
            on_sale,
        } => commands::browse::run(&commands::browse::BrowseArgs {
            search,
            categories,
            min_price,
            max_price,
            sort,
            in_stock,
            on_sale,
        })?,
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&product_id, quantity)?,
            CartAction::Remove { product_id } => commands::cart::remove(&product_id)?,
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set(&product_id, quantity)?,
            CartAction::Show => commands::cart::show()?,
            CartAction::Clear => commands::cart::clear()?,
        },
    }
    Ok(())
}
