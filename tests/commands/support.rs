//! Shared fixtures: a small catalog and a service over it.

use std::str::FromStr;

use rust_decimal::Decimal;
use storefront::{Category, InMemoryCatalog, InMemorySessionStore, Product, Service};

pub type TestService = Service<InMemoryCatalog, InMemorySessionStore>;

pub fn catalog() -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    catalog
        .insert_category(Category::new(1, "django", "django"))
        .unwrap();
    catalog
        .insert_category(Category::new(2, "rust", "rust"))
        .unwrap();
    catalog
        .insert_product(
            Product::new(
                1,
                1,
                "django beginners",
                "django-beginners",
                Decimal::from_str("120.00").unwrap(),
            )
            .with_author("admin"),
        )
        .unwrap();
    catalog
        .insert_product(Product::new(
            2,
            2,
            "rust in action",
            "rust-in-action",
            Decimal::from_str("3.50").unwrap(),
        ))
        .unwrap();
    catalog
        .insert_product(
            Product::new(
                3,
                2,
                "retired",
                "retired",
                Decimal::from_str("1.00").unwrap(),
            )
            .inactive(),
        )
        .unwrap();
    catalog
}

pub fn service() -> TestService {
    Service::new(catalog(), InMemorySessionStore::new()).with_default_commands()
}
