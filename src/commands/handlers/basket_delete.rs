//! Handler: basket.delete

use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::{Catalog, ProductId};
use crate::commands::{Context, HandlerError};

pub const COMMAND: &str = "basket.delete";

#[derive(Deserialize)]
pub struct Input {
    pub product_id: ProductId,
}

pub fn guard<C: Catalog>(ctx: &Context<'_, C>) -> bool {
    ctx.has_field("product_id")
}

pub fn handle<C: Catalog>(ctx: &mut Context<'_, C>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;

    let mut basket = ctx.basket()?;
    basket.delete(input.product_id);

    Ok(json!({
        "qty": basket.count(),
        "subtotal": basket.total_price()?.to_string(),
    }))
}
