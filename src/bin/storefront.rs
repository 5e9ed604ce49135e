//! Demo storefront server over the in-memory catalog and session store.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use storefront::{
    telemetry, Category, InMemoryCatalog, InMemorySessionStore, Product, Service, StorefrontConfig,
};
use tracing::info;

fn demo_catalog() -> Result<InMemoryCatalog, Box<dyn std::error::Error>> {
    let catalog = InMemoryCatalog::new();
    catalog.insert_category(Category::new(1, "django", "django"))?;
    catalog.insert_category(Category::new(2, "rust", "rust"))?;
    catalog.insert_product(
        Product::new(1, 1, "django beginners", "django-beginners", Decimal::from_str("120.00")?)
            .with_author("admin"),
    )?;
    catalog.insert_product(Product::new(
        2,
        2,
        "rust in action",
        "rust-in-action",
        Decimal::from_str("45.50")?,
    ))?;
    Ok(catalog)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env();
    telemetry::init_tracing(&config);

    let catalog = demo_catalog()?;
    let bind_addr = config.bind_addr.clone();
    let service = Service::new(catalog, InMemorySessionStore::new())
        .with_config(config)
        .with_default_commands();
    info!(commands = ?service.commands(), "storefront ready");

    storefront::commands::serve(Arc::new(service), &bind_addr).await?;
    Ok(())
}
