//! Handler: basket.update

use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::{Catalog, ProductId};
use crate::commands::{Context, HandlerError};

pub const COMMAND: &str = "basket.update";

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

    let mut basket = ctx.basket()?;
    basket.update(input.product_id, input.qty);

    Ok(json!({
        "qty": basket.count(),
        "subtotal": basket.total_price()?.to_string(),
    }))
}
