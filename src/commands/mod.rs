//! Commands: convention-based command service over the catalog and the
//! session basket.
//!
//! Register command handlers on a [`Service`]. Each handler receives a
//! [`Context`] with the input payload, the caller's session and the
//! catalog; the service loads the session before the handler runs and
//! persists it afterwards when the handler changed it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use storefront::commands::Service;
//! use storefront::{InMemoryCatalog, InMemorySessionStore};
//! use serde_json::json;
//!
//! let service = Service::new(InMemoryCatalog::new(), InMemorySessionStore::new())
//!     .with_default_commands()
//!     .command("basket.count", |ctx| {
//!         Ok(json!({ "qty": ctx.basket()?.count() }))
//!     });
//!
//! let reply = service.dispatch("basket.count", json!({}), Some("session-key"))?;
//!
//! // HTTP transport (requires "http" feature)
//! // storefront::commands::serve(Arc::new(service), "0.0.0.0:8000").await?;
//! ```
//!
//! ## Handler Convention
//!
//! ```ignore
//! pub const COMMAND: &str = "basket.delete";
//!
//! pub fn guard<C: Catalog>(ctx: &Context<'_, C>) -> bool {
//!     ctx.has_field("product_id")
//! }
//!
//! pub fn handle<C: Catalog>(ctx: &mut Context<'_, C>) -> Result<Value, HandlerError> {
//!     let input = ctx.input::<Input>()?;
//!     let mut basket = ctx.basket()?;
//!     basket.delete(input.product_id);
//!     Ok(json!({ "qty": basket.count() }))
//! }
//! ```

mod context;
mod error;
pub mod handlers;
mod service;

pub use context::Context;
pub use error::HandlerError;
pub use service::{CommandRequest, CommandResponse, Dispatched, Service};

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `COMMAND: &str`: the command name
/// - `guard(ctx) -> bool`: input validation
/// - `handle(ctx) -> Result<Value, HandlerError>`: the handler
///
/// # Example
/// ```ignore
/// let service = storefront::register_handlers!(
///     Service::new(catalog, sessions),
///     handlers::wishlist_add,
///     handlers::wishlist_remove,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .command_guarded(
                $($seg)::+::COMMAND,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}
