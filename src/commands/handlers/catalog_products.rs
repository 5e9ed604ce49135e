//! Handler: catalog.products
//!
//! The storefront home page: every active product.

use serde_json::{json, Value};

use crate::catalog::Catalog;
use crate::commands::{Context, HandlerError};

pub const COMMAND: &str = "catalog.products";

pub fn guard<C: Catalog>(_ctx: &Context<'_, C>) -> bool {
    true
}

pub fn handle<C: Catalog>(ctx: &mut Context<'_, C>) -> Result<Value, HandlerError> {
    let products = ctx.catalog().active_products()?;
    let categories = ctx.catalog().categories()?;
    Ok(json!({ "products": products, "categories": categories }))
}
