//! Handler: basket.summary
//!
//! The basket page: every line enriched with its catalog product, plus the
//! item count and subtotal. Lines whose product has left the catalog are
//! flagged `orphaned` so the page can offer to remove them.

use serde_json::{json, Value};

use crate::basket::BasketItem;
use crate::catalog::Catalog;
use crate::commands::{Context, HandlerError};

pub const COMMAND: &str = "basket.summary";

pub fn guard<C: Catalog>(_ctx: &Context<'_, C>) -> bool {
    true
}

pub fn handle<C: Catalog>(ctx: &mut Context<'_, C>) -> Result<Value, HandlerError> {
    let basket = ctx.basket()?;

    let items: Vec<Value> = basket
        .iter()?
        .map(|item| {
            let line = item.line();
            let mut entry = json!({
                "product_id": line.product_id,
                "price": line.unit_price.to_string(),
                "qty": line.quantity,
                "total_price": line.line_total.to_string(),
            });
            match &item {
                BasketItem::Resolved { product, .. } => {
                    entry["title"] = json!(product.title);
                    entry["slug"] = json!(product.slug);
                }
                BasketItem::Orphaned { .. } => {
                    entry["orphaned"] = json!(true);
                }
            }
            entry
        })
        .collect();

    Ok(json!({
        "qty": basket.count(),
        "subtotal": basket.total_price()?.to_string(),
        "items": items,
    }))
}
