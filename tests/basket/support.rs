//! Test catalog: a handful of books with prices chosen for exact decimal checks.

use std::str::FromStr;

use rust_decimal::Decimal;
use storefront::{Catalog, Category, InMemoryCatalog, Product, ProductId};

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub const A: u64 = 1;
pub const B: u64 = 2;
pub const PRICEY: u64 = 3;
pub const CHEAP: u64 = 4;

pub fn catalog() -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    catalog
        .insert_category(Category::new(1, "books", "books"))
        .unwrap();
    for (id, title, price) in [
        (A, "A", "10.00"),
        (B, "B", "3.50"),
        (PRICEY, "Pricey", "19.99"),
        (CHEAP, "Cheap", "5.00"),
    ] {
        let slug = title.to_lowercase();
        catalog
            .insert_product(Product::new(id, 1, title, slug, dec(price)))
            .unwrap();
    }
    catalog
}

pub fn product(catalog: &InMemoryCatalog, id: u64) -> Product {
    catalog.product(ProductId::new(id)).unwrap().unwrap()
}
