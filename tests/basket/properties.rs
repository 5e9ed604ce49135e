//! Property tests over arbitrary add sequences.

use std::collections::HashMap;

use proptest::prelude::*;
use rust_decimal::Decimal;
use storefront::{
    Basket, Catalog, Category, InMemoryCatalog, InMemorySessionStore, Product, ProductId,
    SessionStore,
};

fn catalog_with(prices: &[(u64, i64)]) -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    catalog
        .insert_category(Category::new(1, "all", "all"))
        .unwrap();
    for (id, cents) in prices {
        catalog
            .insert_product(Product::new(
                *id,
                1,
                format!("p{}", id),
                format!("p-{}", id),
                Decimal::new(*cents, 2),
            ))
            .unwrap();
    }
    catalog
}

fn adds() -> impl Strategy<Value = Vec<(u64, u32)>> {
    prop::collection::vec((1u64..8, 1u32..20), 0..30)
}

proptest! {
    #[test]
    fn count_is_sum_of_last_set_quantities(ops in adds()) {
        let prices: Vec<(u64, i64)> = (1..8).map(|id| (id, 100 * id as i64 + 99)).collect();
        let catalog = catalog_with(&prices);
        let mut session = storefront::Session::new("p");
        let mut basket = Basket::new(&mut session, &catalog).unwrap();

        let mut expected: HashMap<u64, u32> = HashMap::new();
        for (id, qty) in &ops {
            let product = catalog.product(ProductId::new(*id)).unwrap().unwrap();
            basket.add(&product, *qty);
            expected.insert(*id, *qty);
        }

        let expected_count: u64 = expected.values().map(|q| u64::from(*q)).sum();
        prop_assert_eq!(basket.count(), expected_count);
        prop_assert_eq!(basket.len(), expected.len());

        let expected_total: Decimal = expected
            .iter()
            .map(|(id, qty)| Decimal::new(100 * *id as i64 + 99, 2) * Decimal::from(*qty))
            .sum();
        prop_assert_eq!(basket.total_price().unwrap(), expected_total);
    }

    #[test]
    fn store_round_trip_preserves_aggregates(ops in adds(), cents in 1i64..1_000_000) {
        let prices: Vec<(u64, i64)> = (1..8).map(|id| (id, cents + id as i64)).collect();
        let catalog = catalog_with(&prices);
        let store = InMemorySessionStore::new();

        let mut session = store.load("p").unwrap();
        let mut basket = Basket::new(&mut session, &catalog).unwrap();
        for (id, qty) in &ops {
            let product = catalog.product(ProductId::new(*id)).unwrap().unwrap();
            basket.add(&product, *qty);
        }
        let (count, total, lines) = (basket.count(), basket.total_price().unwrap(), basket.lines().clone());
        drop(basket);
        store.commit(&mut session).unwrap();

        let mut reloaded = store.load("p").unwrap();
        let basket = Basket::new(&mut reloaded, &catalog).unwrap();
        prop_assert_eq!(basket.count(), count);
        prop_assert_eq!(basket.total_price().unwrap(), total);
        prop_assert_eq!(basket.lines(), &lines);
    }
}
