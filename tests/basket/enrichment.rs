//! Iteration: batched catalog resolution and orphaned lines.

use storefront::{Basket, BasketItem, ProductId, Session};

use crate::support::{catalog, dec, product, A, B, CHEAP, PRICEY};

#[test]
fn empty_basket_iterates_to_nothing() {
    let catalog = catalog();
    let mut session = Session::new("s1");
    let basket = Basket::new(&mut session, &catalog).unwrap();

    assert_eq!(basket.iter().unwrap().count(), 0);
    assert_eq!(basket.count(), 0);
}

#[test]
fn two_line_scenario() {
    let catalog = catalog();
    let mut session = Session::new("s1");
    let mut basket = Basket::new(&mut session, &catalog).unwrap();
    basket.add(&product(&catalog, A), 2);
    basket.add(&product(&catalog, B), 4);

    let mut items: Vec<BasketItem> = basket.iter().unwrap().collect();
    items.sort_by_key(|item| item.line().product_id);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].line().line_total, dec("20.00"));
    assert_eq!(items[0].product().unwrap().title, "A");
    assert_eq!(items[1].line().line_total, dec("14.00"));
    assert_eq!(items[1].product().unwrap().title, "B");
    assert_eq!(basket.total_price().unwrap(), dec("34.00"));
    assert_eq!(basket.count(), 6);
}

#[test]
fn one_catalog_lookup_per_iteration() {
    let catalog = catalog();
    let mut session = Session::new("s1");
    let mut basket = Basket::new(&mut session, &catalog).unwrap();
    for id in [A, B, PRICEY, CHEAP] {
        basket.add(&product(&catalog, id), 1);
    }

    let before = catalog.batch_lookups();
    assert_eq!(basket.iter().unwrap().count(), 4);
    assert_eq!(catalog.batch_lookups(), before + 1);

    // Restartable: a second pass performs a fresh lookup.
    assert_eq!(basket.iter().unwrap().count(), 4);
    assert_eq!(catalog.batch_lookups(), before + 2);
}

#[test]
fn deleted_products_come_back_orphaned() {
    let catalog = catalog();
    let mut session = Session::new("s1");
    let mut basket = Basket::new(&mut session, &catalog).unwrap();
    basket.add(&product(&catalog, A), 1);
    basket.add(&product(&catalog, B), 2);
    catalog.remove_product(ProductId::new(A)).unwrap();

    let orphans: Vec<BasketItem> = basket.iter().unwrap().filter(BasketItem::is_orphaned).collect();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].line().product_id, ProductId::new(A));
    assert_eq!(orphans[0].line().line_total, dec("10.00"));

    // The line is still in the basket until the shopper removes it.
    assert_eq!(basket.count(), 3);
    basket.delete(ProductId::new(A));
    assert!(basket.iter().unwrap().all(|item| !item.is_orphaned()));
}
