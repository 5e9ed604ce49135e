//! Handler: catalog.category

use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::Catalog;
use crate::commands::{Context, HandlerError};

pub const COMMAND: &str = "catalog.category";

#[derive(Deserialize)]
pub struct Input {
    pub slug: String,
}

pub fn guard<C: Catalog>(ctx: &Context<'_, C>) -> bool {
    ctx.has_field("slug")
}

pub fn handle<C: Catalog>(ctx: &mut Context<'_, C>) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let category = ctx
        .catalog()
        .category_by_slug(&input.slug)?
        .ok_or_else(|| HandlerError::NotFound(format!("category {}", input.slug)))?;
    let products = ctx.catalog().products_in_category(&category.slug)?;
    Ok(json!({ "category": category, "products": products }))
}
