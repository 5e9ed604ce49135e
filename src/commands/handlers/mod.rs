//! Built-in storefront commands.
//!
//! Each module follows the handler convention: a `COMMAND` name, a `guard`
//! for input validation and a `handle` function.

pub mod basket_add;
pub mod basket_delete;
pub mod basket_summary;
pub mod basket_update;
pub mod catalog_category;
pub mod catalog_product;
pub mod catalog_products;

use super::Service;
use crate::catalog::Catalog;
use crate::session::SessionStore;

impl<C: Catalog + 'static, S: SessionStore> Service<C, S> {
    /// Register every built-in basket and catalog command.
    pub fn with_default_commands(self) -> Self {
        crate::register_handlers!(
            self,
            basket_add,
            basket_update,
            basket_delete,
            basket_summary,
            catalog_products,
            catalog_product,
            catalog_category,
        )
    }
}
