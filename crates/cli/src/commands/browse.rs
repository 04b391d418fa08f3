//! Filter and sort the catalog from the command line.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use orchard_storefront::catalog::{CatalogEngine, FilterSpec, FilteredView, PriceRange, SortKey};
use orchard_storefront::clock::{Clock, SystemClock};
use orchard_storefront::config::StorefrontConfig;
use orchard_storefront::source::{JsonFileSource, ProductCatalogSource};

/// Parsed `browse` arguments.
pub struct BrowseArgs {
    pub search: String,
    pub categories: Vec<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort: String,
    pub in_stock: bool,
    pub on_sale: bool,
}

/// Run the browse command against the configured catalog file.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or a price flag is not
/// a valid decimal.
pub fn run(args: &BrowseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let spec = build_spec(args)?;

    let products = JsonFileSource::new(&config.catalog_path).load()?;

    let mut engine = CatalogEngine::with_view_ttl(Arc::new(SystemClock), config.view_cache_ttl);
    engine.set_products(products);

    let view = engine.view(&spec);
    print_view(&view);
    Ok(())
}

fn build_spec(args: &BrowseArgs) -> Result<FilterSpec, Box<dyn std::error::Error>> {
    let min = parse_price(args.min_price.as_deref())?.unwrap_or(Decimal::ZERO);
    let max = parse_price(args.max_price.as_deref())?.unwrap_or(Decimal::MAX);
    if min > max {
        return Err("--min-price exceeds --max-price".into());
    }

    Ok(FilterSpec {
        search: args.search.clone(),
        categories: args.categories.iter().cloned().collect::<BTreeSet<_>>(),
        price_range: PriceRange::new(min, max),
        sort_by: SortKey::parse(&args.sort),
        in_stock: args.in_stock,
        on_sale: args.on_sale,
    })
}

fn parse_price(value: Option<&str>) -> Result<Option<Decimal>, Box<dyn std::error::Error>> {
    match value {
        Some(v) => Decimal::from_str(v)
            .map(Some)
            .map_err(|e| format!("invalid price {v}: {e}").into()),
        None => Ok(None),
    }
}

#[allow(clippy::print_stdout)]
fn print_view(view: &FilteredView) {
    let now = SystemClock.now();

    for product in &view.products {
        let price = product.price.round_dp(2);
        if product.is_on_sale(now) {
            let effective = product.effective_price(now).round_dp(2);
            println!(
                "{:<4} {:<32} ${effective} (was ${price})  stock {}",
                product.id, product.name, product.stock
            );
        } else {
            println!(
                "{:<4} {:<32} ${price}  stock {}",
                product.id, product.name, product.stock
            );
        }
    }

    println!();
    println!("{} of the catalog matched", view.products.len());
    for (category, count) in &view.category_counts {
        println!("  {category} ({count})");
    }
    if let Some(bound) = view.price_bound {
        println!("price slider bound: ${bound}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> BrowseArgs {
        BrowseArgs {
            search: String::new(),
            categories: Vec::new(),
            min_price: None,
            max_price: None,
            sort: "newest".to_owned(),
            in_stock: false,
            on_sale: false,
        }
    }

    #[test]
    fn test_build_spec_defaults_are_unbounded() {
        let spec = build_spec(&args()).expect("spec");
        assert_eq!(spec, FilterSpec::default());
    }

    #[test]
    fn test_build_spec_rejects_inverted_range() {
        let mut inverted = args();
        inverted.min_price = Some("100".to_owned());
        inverted.max_price = Some("50".to_owned());
        assert!(build_spec(&inverted).is_err());
    }

    #[test]
    fn test_build_spec_rejects_garbage_price() {
        let mut bad = args();
        bad.min_price = Some("cheap".to_owned());
        assert!(build_spec(&bad).is_err());
    }

    #[test]
    fn test_unknown_sort_falls_back_to_newest() {
        let mut odd = args();
        odd.sort = "by_vibes".to_owned();
        let spec = build_spec(&odd).expect("spec");
        assert_eq!(spec.sort_by, SortKey::Newest);
    }
}
