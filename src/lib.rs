//! Storefront: catalog browsing and a session-backed shopping basket.
//!
//! - [`catalog`]: products, categories and the [`Catalog`] lookup trait.
//! - [`session`]: per-user session bags and the [`SessionStore`] trait.
//! - [`basket`]: the [`Basket`] view over a session.
//! - [`commands`]: the command service that ties them together, with an
//!   optional axum transport behind the `http` feature.

pub mod basket;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod session;

#[cfg(feature = "http")]
pub mod telemetry;

pub use basket::{
    Basket, BasketError, BasketItem, BasketLine, PricedLine, StoredLine, DEFAULT_BASKET_KEY,
};
pub use catalog::{Catalog, CatalogError, Category, InMemoryCatalog, Product, ProductId};
pub use config::StorefrontConfig;
pub use session::{InMemorySessionStore, Session, SessionError, SessionStore};
pub use commands::{CommandRequest, CommandResponse, Context, Dispatched, HandlerError, Service};
