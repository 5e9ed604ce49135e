//! Handler: basket.add
//!
//! Puts a catalog product in the basket. Re-adding a product sets its
//! quantity rather than incrementing it.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::{Catalog, ProductId};
use crate::commands::{Context, HandlerError};

pub const COMMAND: &str = "basket.add";

#[derive(Deserialize)]
pub struct Input {
    pub product_id: ProductId,
    pub qty: u32,
}

pub fn guard<C: Catalog>(ctx: &Context<'_, C>) -> bool {
    ctx.has_field("product_id") && ctx.positive_u32("qty").is_some()
}

pub fn handle<C: Catalog>(ctx: &mut Context<'_, C>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;

    let product = ctx
        .catalog()
        .product(input.product_id)?
        .filter(|product| product.is_active)
        .ok_or_else(|| HandlerError::NotFound(format!("product {}", input.product_id)))?;

    let mut basket = ctx.basket()?;
    basket.add(&product, input.qty);

    Ok(json!({ "qty": basket.count() }))
}
