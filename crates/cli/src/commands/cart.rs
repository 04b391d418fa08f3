//! Manage the persisted cart from the command line.

use std::sync::Arc;

use orchard_core::ProductId;
use orchard_storefront::cart::CartStore;
use orchard_storefront::clock::{Clock, SystemClock};
use orchard_storefront::config::StorefrontConfig;
use orchard_storefront::diagnostics::TracingSink;
use orchard_storefront::source::{JsonFileSource, ProductCatalogSource};
use orchard_storefront::storage::{CartStorage, FileBackend, KvStore};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn open_store() -> Result<(StorefrontConfig, CartStore<FileBackend>), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let backend = FileBackend::open(&config.data_dir)?;
    let kv = KvStore::new(backend, Arc::new(TracingSink));
    Ok((config, CartStore::new(CartStorage::new(kv))))
}

/// Add units of a product to the cart.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn add(product_id: &str, quantity: u32) -> CliResult {
    let (_, mut store) = open_store()?;
    store.add_line(ProductId::new(product_id), quantity);
    print_lines(&store);
    Ok(())
}

/// Remove a product's line from the cart.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn remove(product_id: &str) -> CliResult {
    let (_, mut store) = open_store()?;
    store.remove_line(&ProductId::new(product_id));
    print_lines(&store);
    Ok(())
}

/// Overwrite the quantity of an existing line. Zero removes it.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn set(product_id: &str, quantity: u32) -> CliResult {
    let (_, mut store) = open_store()?;
    store.set_quantity(&ProductId::new(product_id), quantity);
    print_lines(&store);
    Ok(())
}

/// Print the cart, with a subtotal when the catalog file is readable.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
#[allow(clippy::print_stdout)]
pub fn show() -> CliResult {
    let (config, store) = open_store()?;
    print_lines(&store);

    // Subtotal needs the catalog for prices; skip it if there is none yet
    if let Ok(products) = JsonFileSource::new(&config.catalog_path).load() {
        let subtotal = store.subtotal(&products, SystemClock.now());
        println!("subtotal: ${}", subtotal.round_dp(2));
    }
    Ok(())
}

/// Empty the cart and remove the persisted key.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn clear() -> CliResult {
    let (_, mut store) = open_store()?;
    store.clear();
    print_lines(&store);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_lines(store: &CartStore<FileBackend>) {
    if store.lines().is_empty() {
        println!("cart is empty");
        return;
    }
    for line in store.lines() {
        println!("{:<4} x{}", line.product_id, line.quantity);
    }
    println!("{} items", store.total_quantity());
}
